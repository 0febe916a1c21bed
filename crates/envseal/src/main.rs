// SPDX-FileCopyrightText: 2026 Envseal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! envseal - enroll salted secret hashes and expose them to tooling.

mod enroll;
mod expose;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use envseal_config::EnvsealConfig;
use envseal_core::EnvsealError;

/// Enroll salted secret hashes into a dotenv store.
#[derive(Parser, Debug)]
#[command(name = "envseal", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prompt for names and secrets, then overwrite the store with their salts and hashes.
    Enroll {
        /// Store file to write (overrides `store.path`).
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Print the `_SALT` / `_HASH` entries visible from the store and the environment.
    Expose {
        /// Store file to read (overrides `store.path`).
        #[arg(long)]
        store: Option<PathBuf>,
        /// Abbreviate values.
        #[arg(long)]
        mask: bool,
        /// Print a JSON object instead of KEY=VALUE lines.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("envseal: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), EnvsealError> {
    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.logging.level);
    tracing::debug!(command = ?cli.command, store = %config.store.path.display(), "starting");

    match cli.command {
        Commands::Enroll { store } => {
            let path = store.unwrap_or(config.store.path);
            enroll::run_enroll(&path)
        }
        Commands::Expose { store, mask, json } => {
            let path = store.unwrap_or(config.store.path);
            expose::run_expose(&path, mask, json)
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<EnvsealConfig, EnvsealError> {
    let loaded = match path {
        Some(path) => envseal_config::load_and_validate_path(path),
        None => envseal_config::load_and_validate(),
    };
    loaded.map_err(|errors| {
        envseal_config::render_errors(&errors);
        EnvsealError::Config(format!("{} problem(s) in configuration", errors.len()))
    })
}

/// Log to stderr; stdout is reserved for `expose` output.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("envseal={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
