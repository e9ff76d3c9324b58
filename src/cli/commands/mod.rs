//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves its file arguments to a filesystem and a relative path
//! 2. Calls into the document layer
//! 3. Formats and displays output
//!
//! Handlers return `anyhow` errors with context; `main` prints them.

mod check;
mod completion;
mod config_cmd;
mod fmt;
mod show;

// Re-export command functions for testing and direct invocation
pub use check::check;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use fmt::fmt;
pub use show::show;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use super::args::{Command, ConfigAction};
use super::Context;
use crate::fs::OsFs;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Check { files } => check(ctx, &files),
        Command::Show { file, json } => show(ctx, &file, json),
        Command::Fmt {
            file,
            output,
            atomic,
        } => fmt(ctx, &file, output.as_deref(), atomic),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_get(ctx, &key),
            ConfigAction::Set { key, value } => config_set(ctx, &key, &value),
            ConfigAction::List => config_list(ctx),
        },
        Command::Completion { shell } => completion(shell),
    }
}

/// Split a command-line path into a filesystem rooted at its directory
/// and the file name within it.
pub(crate) fn locate(path: &Path) -> Result<(OsFs, PathBuf)> {
    let name = path
        .file_name()
        .ok_or_else(|| anyhow!("not a file path: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((OsFs::new(dir), PathBuf::from(name)))
}
