//! Global context for CLI commands

use anyhow::{Result, anyhow};
use classbook_core::{config::Config, registry::FeatureRegistry};
use colored::Colorize;
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG: &str = "classbook.toml";

/// Global context containing config and verbosity
pub struct Context {
    pub config: Config,
    pub verbose: bool,
}

impl Context {
    /// Create a new context by loading classbook.toml
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit config path does not exist
    /// - Config file cannot be read or parsed
    pub fn new(config_path: Option<&Path>, verbose: bool) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(anyhow!("Config file not found: {}", path.display()));
                }
                Config::from_file(path)?
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG);
                if path.exists() {
                    Config::from_file(path)?
                } else {
                    Config::default()
                }
            }
        };

        Ok(Self { config, verbose })
    }

    /// Load a feature bundle
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid bundle
    pub fn load_registry(&self, path: &Path) -> Result<FeatureRegistry> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
        let registry = FeatureRegistry::from_json(&json)?;

        if self.verbose {
            eprintln!(
                "{} Loaded {} features from {}",
                "→".cyan(),
                registry.len(),
                path.display()
            );
        }
        Ok(registry)
    }
}
