//! config command - Get, set, or list configuration values

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::config::schema::KNOWN_KEYS;
use crate::core::config::{Config, ConfigError, FileConfig};
use crate::ui::output;

/// The file `config` commands read and write.
fn config_path(ctx: &Context) -> Result<PathBuf> {
    match &ctx.config_path {
        Some(path) => Ok(path.clone()),
        None => Ok(Config::default_path().ok_or(ConfigError::NoConfigDir)?),
    }
}

/// Read the config file, treating a missing file as empty.
fn read_file_config(path: &std::path::Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let config = Config::load(Some(path)).context("Failed to load config")?;
    Ok(config.file)
}

/// Get a configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let file = read_file_config(&config_path(ctx)?)?;

    if let Some(value) = file.get(key)? {
        output::print(value, ctx.verbosity);
    }
    Ok(())
}

/// Set a configuration value.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let path = config_path(ctx)?;
    let mut file = read_file_config(&path)?;

    file.set(key, value)?;
    Config::write(&path, &file).context("Failed to write config")?;

    output::print(format!("Set {} = {}", key, value), ctx.verbosity);
    Ok(())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    let path = config_path(ctx)?;
    let file = read_file_config(&path)?;

    output::print(format!("# {}", path.display()), ctx.verbosity);
    for key in KNOWN_KEYS {
        let value = file.get(key)?.unwrap_or_else(|| "(not set)".to_string());
        output::print(format!("{} = {}", key, value), ctx.verbosity);
    }
    Ok(())
}
