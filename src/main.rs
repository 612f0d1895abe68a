//! exhl - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use exhl::cli::{Cli, Commands, ConfigCommands};
use exhl::Config;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "EXHL_LOG";

fn init_logging(verbose: bool) {
    let default = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    match cli.command {
        Commands::Extract { note, json, copy } => {
            commands::extract::handle(&config_path, &note, json, copy)
        }
        Commands::Property { note, name } => {
            commands::property::handle(&config_path, &note, name.as_deref())
        }
        Commands::Explode {
            file,
            title,
            dir,
            index,
        } => commands::explode::handle(&config_path, &file, title.as_deref(), dir.as_deref(), index),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config_path),
            ConfigCommands::Edit => commands::config::handle_edit(&config_path),
            ConfigCommands::Path => commands::config::handle_path(&config_path),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
