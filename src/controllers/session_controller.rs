use std::io::{BufRead, Write};

use log::debug;

use crate::console::app::{RecipeSession, SessionAction};
use crate::error::{RecipeError, Result};
use crate::models::Recipe;

/// Run the interactive recipe session over the given input and output
///
/// Writes each prompt on its own line, reads one answer per prompt and writes any
/// recipe rendering the answer produced. Returns the recipe as it stands at the end.
pub fn run_session<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<Recipe> {
    let mut session = RecipeSession::new();

    loop {
        let prompt = session.prompt();
        writeln!(output, "{}", prompt)?;
        output.flush()?;

        let line = read_answer(&mut input)?.ok_or(RecipeError::UnexpectedEndOfInput(prompt))?;

        let action = session.handle_line(&line)?;
        output.write_all(session.take_output().as_bytes())?;

        if let SessionAction::Finished = action {
            break;
        }
    }

    output.flush()?;
    debug!("Recipe session finished");

    Ok(session.into_recipe())
}

/// Read one line without its `\n` or `\r\n` terminator, or `None` at end of input
///
/// Free text is decoded lossily; invalid UTF-8 never ends the session.
fn read_answer<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
