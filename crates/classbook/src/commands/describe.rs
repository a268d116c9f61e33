//! Describe command - render feature descriptions for one class

use crate::context::Context;
use crate::output::{print_json, print_text};
use anyhow::{Result, anyhow};
use classbook_core::describe::{Describer, describe_class};
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// JSON shape of `classbook describe --json`
#[derive(Serialize)]
struct DescribeOutput<'a> {
    class: &'a str,
    name: &'a str,
    descriptions: BTreeMap<String, String>,
}

/// Render descriptions for `class`
///
/// With `feature`, only that feature is rendered; it does not need a binding
/// for the class.
pub fn run(
    features: &Path,
    class: &str,
    feature: Option<String>,
    json: bool,
    config: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let registry = ctx.load_registry(features)?;
    let name = ctx.config.display_name(class);

    let descriptions = match feature {
        Some(slug) => {
            let feature = registry
                .get(&slug)
                .ok_or_else(|| anyhow!("Unknown feature '{}'", slug))?;
            let text = Describer::new(&registry, class, name).describe(feature)?;
            BTreeMap::from([(slug, text)])
        }
        None => describe_class(&registry, class, &ctx.config)?,
    };

    if json {
        let output = DescribeOutput {
            class,
            name,
            descriptions,
        };
        print_json(&output)?;
        return Ok(());
    }

    if descriptions.is_empty() {
        print_text(&format!(
            "{} No features are bound to class '{}'",
            "⚠".yellow(),
            class
        ))?;
        return Ok(());
    }

    let count = descriptions.len();
    for (i, (slug, text)) in descriptions.into_iter().enumerate() {
        if count > 1 {
            print_text(&format!("{} {}", "→".cyan(), slug.bold()))?;
        }
        print_text(&text)?;
        if i + 1 < count {
            print_text("")?;
        }
    }
    Ok(())
}
