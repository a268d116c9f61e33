// Core modules
pub mod config;
pub mod describe;
pub mod error;
pub mod model;
pub mod ordinal;
pub mod progression;
pub mod registry;
pub mod template;

// Re-export commonly used types
pub use error::{ClassbookError, Result};
