use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassbookError {
    // Registry errors
    #[error("DUPLICATE_SLUG: feature slug '{0}' is defined more than once")]
    DuplicateSlug(String),

    #[error("BUNDLE_INVALID: failed to parse feature bundle: {0}")]
    BundleInvalid(String),

    // Progression errors
    #[error("COLLISION: column '{column}' disagrees at level {level}: {existing} vs {incoming}")]
    Collision {
        column: String,
        level: u32,
        existing: String,
        incoming: String,
    },

    #[error("OVERFLOW: column '{column}' at level {level}: {existing} + {incoming} does not fit")]
    Overflow {
        column: String,
        level: u32,
        existing: String,
        incoming: String,
    },

    // Template errors
    #[error("MALFORMED_TAG: unrecognized tag '{tag}' at line {line}")]
    MalformedTag { tag: String, line: usize },

    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    // Description errors
    #[error("UNKNOWN_REFERENCE: feature '{parent}' references unknown child '{child}'")]
    UnknownReference { parent: String, child: String },

    #[error("CYCLIC_REFERENCE: feature '{0}' is its own descendant")]
    CyclicReference(String),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for ClassbookError {
    fn from(err: serde_json::Error) -> Self {
        ClassbookError::BundleInvalid(err.to_string())
    }
}

impl From<crate::template::error::TemplateError> for ClassbookError {
    fn from(err: crate::template::error::TemplateError) -> Self {
        use crate::template::error::TemplateError;

        match err {
            TemplateError::MalformedTag { tag, line } => ClassbookError::MalformedTag { tag, line },
            TemplateError::InvalidInput { message } => ClassbookError::InvalidInput(message),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassbookError>;
