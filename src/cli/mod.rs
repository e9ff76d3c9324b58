//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install the log subscriber
//! - Load configuration and dispatch to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Handlers resolve paths to an [`OsFs`] rooted at
//! the file's directory and call into [`crate::core::modulemd`].
//!
//! [`OsFs`]: crate::fs::OsFs

pub mod args;
pub mod commands;

pub use args::{Cli, Command, ConfigAction, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use tracing::Level;

use crate::core::config::Config;
use crate::ui::output::Verbosity;

/// Execution context shared by command handlers.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Output verbosity
    pub verbosity: Verbosity,
    /// Loaded configuration
    pub config: Config,
    /// Config file named with `--config`
    pub config_path: Option<PathBuf>,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug, cli.quiet);

    let config = match cli.command {
        // `config set` must work before a config file exists.
        Command::Config { .. } => Config::load(cli.config.as_deref()).unwrap_or_default(),
        _ => Config::load(cli.config.as_deref()).context("Failed to load config")?,
    };

    let ctx = Context {
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
        config,
        config_path: cli.config.clone(),
    };

    commands::dispatch(cli.command, &ctx)
}

/// Install a stderr subscriber whose level follows the global flags.
fn init_logging(debug: bool, quiet: bool) {
    let level = if debug {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
