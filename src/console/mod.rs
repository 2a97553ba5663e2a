pub mod app;
pub mod parse;
mod prompt_states;
