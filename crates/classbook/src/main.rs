mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Table {
            features,
            class,
            offset,
            max_level,
            summary,
        } => commands::table::run(
            &features, &class, offset, max_level, summary, config, cli.verbose,
        ),
        Commands::Merge { tables } => commands::merge::run(&tables, cli.verbose),
        Commands::Describe {
            features,
            class,
            feature,
            json,
        } => commands::describe::run(&features, &class, feature, json, config, cli.verbose),
        Commands::Levels { levels } => commands::levels::run(&levels),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
