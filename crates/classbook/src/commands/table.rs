//! Table command - compose one class's progression table

use crate::context::Context;
use crate::output::{print_json, print_text};
use anyhow::Result;
use classbook_core::ordinal::read_levels;
use classbook_core::progression::{ComposeOptions, compose_class};
use colored::Colorize;
use std::path::Path;

/// Compose and print the table of `class`
///
/// # Arguments
///
/// * `features` - Feature bundle to read
/// * `offset` - Added to every fragment level; rows pushed past the table are dropped
/// * `max_level` - Row count; falls back to classbook.toml
/// * `summary` - Print one line per feature instead of the JSON table
pub fn run(
    features: &Path,
    class: &str,
    offset: u32,
    max_level: Option<u32>,
    summary: bool,
    config: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let registry = ctx.load_registry(features)?;

    if registry.class_features(class).is_empty() {
        eprintln!(
            "{} No feature has a progression for class '{}'",
            "⚠".yellow(),
            class
        );
    }

    let options = ComposeOptions {
        max_level: max_level.unwrap_or_else(|| ctx.config.max_level(class)),
        level_offset: offset,
    };
    let table = compose_class(&registry, class, options);

    if summary {
        print_text(&format!("{}", ctx.config.display_name(class).bold()))?;
        for (feature, levels) in table.feature_levels() {
            print_text(&format!("  {}: {}", feature, read_levels(&levels)?))?;
        }
    } else {
        print_json(&table)?;
    }
    Ok(())
}
