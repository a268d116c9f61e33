//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "classbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to classbook.toml (default: ./classbook.toml if present)
    #[arg(long, global = true, env = "CLASSBOOK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compose the progression table of one class
    Table {
        /// Feature bundle (JSON)
        #[arg(long)]
        features: PathBuf,

        /// Class slug
        #[arg(long)]
        class: String,

        /// Shift every fragment level by this amount
        #[arg(long, default_value_t = 0)]
        offset: u32,

        /// Number of table rows (overrides classbook.toml)
        #[arg(long)]
        max_level: Option<u32>,

        /// Print the levels each feature is gained at instead of the table
        #[arg(long)]
        summary: bool,
    },

    /// Merge composed tables into one
    Merge {
        /// Table files (JSON) produced by `classbook table`
        #[arg(required = true)]
        tables: Vec<PathBuf>,
    },

    /// Render feature descriptions for one class
    Describe {
        /// Feature bundle (JSON)
        #[arg(long)]
        features: PathBuf,

        /// Class slug
        #[arg(long)]
        class: String,

        /// Describe only this feature
        #[arg(long)]
        feature: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Phrase a list of levels ("1st level and again at 5th level")
    Levels {
        #[arg(required = true)]
        levels: Vec<u32>,
    },
}
