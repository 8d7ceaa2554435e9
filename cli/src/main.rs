//! User Directory — command-line front-end
//!
//! ```sh
//! # Sign in as the built-in administrator
//! user-directory login admin admin
//!
//! # Register, list, edit and remove users
//! user-directory add --name Ana --login ana1 --password x --confirm x
//! user-directory list
//! user-directory edit 1700000000000 --name "Ana Maria"
//! user-directory delete 1700000000000
//!
//! # Custom config or data directory
//! user-directory --config ./config.toml --data-dir ./data list
//! ```

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};

use user_directory::config::StorageBackend;
use user_directory::{default_config_path, init_tracing, App, AppConfig};

use commands::{execute, failure_message, Command};

/// Manage the local user directory.
#[derive(Parser, Debug)]
#[command(name = "user-directory", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "USER_DIRECTORY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the data directory of the file store.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref dir) = cli.data_dir {
        config.storage.backend = StorageBackend::File;
        config.storage.data_dir = dir.clone();
    }

    init_tracing(&config.logging);
    match load_error {
        Some(e) => error!("Failed to load config: {}. Using defaults.", e),
        None => debug!("Configuration loaded from {}", config_path.display()),
    }

    let app = match App::start(&config).await {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to open storage: {}", e);
            eprintln!("{}", failure_message(&e));
            return ExitCode::FAILURE;
        }
    };

    match execute(&app, cli.command).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            info!(error = %e, "Command failed");
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}
