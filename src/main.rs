use std::io;

use anyhow::Context;
use env_logger::Env;
use recipe_scaler::controllers::run_session;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the recipe transcript on stdout stays clean
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    let stdout = io::stdout();

    run_session(stdin.lock(), stdout.lock()).context("Recipe session failed")?;

    Ok(())
}
