use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Expected a whole number, got '{input}': {source}")]
    InvalidCount {
        input: String,
        source: ParseIntError,
    },

    #[error("Expected a decimal number, got '{input}': {source}")]
    InvalidNumber {
        input: String,
        source: ParseFloatError,
    },

    #[error("Input ended before answering: {0}")]
    UnexpectedEndOfInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No original quantity recorded for ingredient: {0}")]
    MissingOriginalQuantity(String),
}

pub type Result<T> = std::result::Result<T, RecipeError>;
