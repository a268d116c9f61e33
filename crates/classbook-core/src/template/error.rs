//! Template error types

use std::fmt;

/// Tag substitution errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Tag name is neither a level tag nor a known variable
    MalformedTag {
        /// The tag name, without delimiters
        tag: String,
        /// Line number where the tag was found
        line: usize,
    },

    /// A level phrase was requested for an empty level list
    InvalidInput {
        /// Error message
        message: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::MalformedTag { tag, line } => {
                write!(
                    f,
                    "Unrecognized tag '{}' at line {}. Expected class, level, end-levels, all-levels or a variable name",
                    tag, line
                )
            }
            TemplateError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
        }
    }
}

impl std::error::Error for TemplateError {}
