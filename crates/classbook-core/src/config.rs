//! classbook.toml - per-class display names and table sizes

use crate::error::{ClassbookError, Result};
use crate::model::DEFAULT_MAX_LEVEL;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// classbook.toml schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub compose: ComposeConfig,
    #[serde(default)]
    pub classes: BTreeMap<String, ClassConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposeConfig {
    #[serde(default = "default_max_level")]
    pub max_level: u32,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
        }
    }
}

fn default_max_level() -> u32 {
    DEFAULT_MAX_LEVEL
}

/// Settings for one class, keyed by class slug
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassConfig {
    /// Name substituted for the `class` tag
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub max_level: Option<u32>,
}

impl Config {
    /// Load classbook.toml
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ClassbookError::ConfigParseError(e.to_string()))
    }

    /// Write classbook.toml
    pub fn to_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ClassbookError::ConfigParseError(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Number of table rows for `class`
    pub fn max_level(&self, class: &str) -> u32 {
        self.classes
            .get(class)
            .and_then(|c| c.max_level)
            .unwrap_or(self.compose.max_level)
    }

    /// Display name for `class`, falling back to the slug itself
    pub fn display_name<'a>(&'a self, class: &'a str) -> &'a str {
        self.classes
            .get(class)
            .and_then(|c| c.name.as_deref())
            .unwrap_or(class)
    }
}
