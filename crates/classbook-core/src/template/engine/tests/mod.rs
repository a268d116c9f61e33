//! Tests for the tag substitution engine
//!
//! Organized by concern: tag scanning, plain substitution, level tags,
//! line removal and errors.

use super::*;

// Test helper functions
mod helpers;


// Substitution tests
mod substitute_basic;
