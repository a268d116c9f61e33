//! Ordinal phrasing for character levels
//!
//! Turns level numbers into the prose used by feature descriptions:
//! `3` → `"3rd level"`, `[1, 5, 11]` → `"1st level and again at 5th and 11th level"`.

use crate::template::error::TemplateError;

/// English ordinal for an integer: 1st, 2nd, 3rd, 4th, 11th, 21st, 113th
pub fn ordinal(n: u32) -> String {
    // Anything in the teens (11, 12, 13, 111, 512...) always takes "th"
    let suffix = if n % 100 / 10 == 1 {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{}{}", n, suffix)
}

/// Join one or more levels into a level phrase
///
/// # Errors
///
/// Returns [`TemplateError::InvalidInput`] when `levels` is empty.
pub fn read_levels(levels: &[u32]) -> Result<String, TemplateError> {
    let ordinals: Vec<String> = levels.iter().map(|&level| ordinal(level)).collect();

    match ordinals.as_slice() {
        [] => Err(TemplateError::InvalidInput {
            message: "at least one level is required".to_string(),
        }),
        [only] => Ok(format!("{} level", only)),
        [first, second] => Ok(format!("{} level and again at {} level", first, second)),
        [first, second, third] => Ok(format!(
            "{} level and again at {} and {} level",
            first, second, third
        )),
        [first, middle @ .., last] => Ok(format!(
            "{} level and again at {}, and {} level",
            first,
            middle.join(", "),
            last
        )),
    }
}
