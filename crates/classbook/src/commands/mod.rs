//! CLI command implementations

pub mod describe;
pub mod levels;
pub mod merge;
pub mod table;
