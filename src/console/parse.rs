use crate::error::{RecipeError, Result};

/// Parse a count such as the number of ingredients
///
/// Negative values are accepted here; callers decide what they mean.
/// Counts are 32-bit; anything outside `i32` is rejected like other malformed input.
pub fn parse_count(line: &str) -> Result<i32> {
    let trimmed = line.trim();
    trimmed
        .parse::<i32>()
        .map_err(|source| RecipeError::InvalidCount {
            input: trimmed.to_string(),
            source,
        })
}

pub fn parse_decimal(line: &str) -> Result<f64> {
    let trimmed = line.trim();
    trimmed
        .parse::<f64>()
        .map_err(|source| RecipeError::InvalidNumber {
            input: trimmed.to_string(),
            source,
        })
}

/// Only the exact answer "yes", in any letter case, counts as yes
///
/// Surrounding whitespace is not trimmed, so " yes" is a no.
pub fn is_yes(line: &str) -> bool {
    line.eq_ignore_ascii_case("yes")
}
