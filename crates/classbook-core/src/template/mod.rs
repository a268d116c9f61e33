//! Template module - tag substitution for feature descriptions
//!
//! Feature descriptions are markdown templates with embedded tags that are
//! resolved against the feature's class binding.
//!
//! ## Syntax
//!
//! A tag is a backtick-wrapped `{( name )}` with exactly one space on each
//! side of the name, all on one line:
//!
//! - `` `{( class )}` `` - the class display name
//! - `` `{( level )}` `` - the next unvisited fragment level ("3rd level")
//! - `` `{( end-levels )}` `` - every remaining unvisited level at once
//! - `` `{( all-levels )}` `` - every fragment level, ignoring visits
//! - `` `{( name )}` `` - a variable from the class binding
//!
//! When `level` or `end-levels` runs out of levels, the whole line holding
//! the tag is removed.

pub mod engine;
pub mod error;

pub use engine::{substitute, TagContext, TagEngine};
pub use error::TemplateError;
