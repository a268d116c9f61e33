//! Merge command - combine composed tables level by level

use crate::output::print_json;
use anyhow::{Result, anyhow};
use classbook_core::model::ProgressionTable;
use classbook_core::progression::merge;
use colored::Colorize;
use std::path::PathBuf;

/// Merge the tables stored in `paths` and print the result
pub fn run(paths: &[PathBuf], verbose: bool) -> Result<()> {
    let tables = paths
        .iter()
        .map(|path| {
            let json = std::fs::read_to_string(path)
                .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
            let table: ProgressionTable = serde_json::from_str(&json)
                .map_err(|e| anyhow!("Invalid table {}: {}", path.display(), e))?;
            if verbose {
                eprintln!("{} {} ({} rows)", "→".cyan(), path.display(), table.len());
            }
            Ok(table)
        })
        .collect::<Result<Vec<_>>>()?;

    let merged = merge(&tables)?;
    print_json(&merged)?;
    Ok(())
}
