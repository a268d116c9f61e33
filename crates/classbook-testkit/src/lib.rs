//! Test utilities for classbook
//!
//! This crate provides shared testing utilities used across the classbook workspace:
//! workspace-local temporary directories and the sample data repository.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Sample feature bundle: a fighter and a wizard, keyed by slug
pub const SAMPLE_BUNDLE: &str = include_str!("../fixtures/bundle.json");

/// classbook.toml naming both sample classes
pub const SAMPLE_CONFIG: &str = include_str!("../fixtures/classbook.toml");

/// Bundle listing the same slug twice
pub const DUPLICATE_BUNDLE: &str = include_str!("../fixtures/broken.json");

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This ensures all test temporary files are centralized in a single location
/// that is gitignored and easy to clean up manually if needed.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use classbook_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("bundle.json");
/// std::fs::write(&file_path, "[]").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
///
/// Use this variant when you need proper error handling instead of panics.
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Write `contents` to `dir/name` and return the path
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture");
    path
}

/// Write `value` as pretty JSON to `dir/name` and return the path
pub fn write_json(dir: &Path, name: &str, value: &serde_json::Value) -> PathBuf {
    let json = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
    write_fixture(dir, name, &json)
}

/// A directory holding the sample bundle and config
///
/// Layout:
///
/// ```text
/// <temp>/
///   bundle.json
///   classbook.toml
/// ```
pub struct SampleRepo {
    dir: TempDir,
}

impl SampleRepo {
    pub fn new() -> Self {
        let dir = temp_dir_in_workspace();
        write_fixture(dir.path(), "bundle.json", SAMPLE_BUNDLE);
        write_fixture(dir.path(), "classbook.toml", SAMPLE_CONFIG);
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn bundle(&self) -> PathBuf {
        self.dir.path().join("bundle.json")
    }

    pub fn config(&self) -> PathBuf {
        self.dir.path().join("classbook.toml")
    }
}

impl Default for SampleRepo {
    fn default() -> Self {
        Self::new()
    }
}
