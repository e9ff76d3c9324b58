//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Example
//!
//! ```toml
//! [save]
//! strategy = "atomic"
//! ```
//!
//! # Validation
//!
//! Unknown keys are rejected at parse time. Enumerated values such as the
//! save strategy are checked by serde while parsing.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::modulemd::SaveStrategy;

/// Contents of a config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Save defaults
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save: Option<SaveConfig>,
}

impl FileConfig {
    /// Look up a value by dotted key.
    ///
    /// Returns `Ok(None)` for a known key that is unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unknown key.
    pub fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match key {
            "save.strategy" => Ok(self
                .save
                .as_ref()
                .and_then(|s| s.strategy)
                .map(|s| strategy_name(s).to_string())),
            other => Err(unknown_key(other)),
        }
    }

    /// Set a value by dotted key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unknown key or a value
    /// the key does not accept.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "save.strategy" => {
                let strategy = parse_strategy(value)?;
                self.save.get_or_insert_with(SaveConfig::default).strategy = Some(strategy);
                Ok(())
            }
            other => Err(unknown_key(other)),
        }
    }
}

/// Save settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SaveConfig {
    /// How existing files are replaced (default: "replace")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<SaveStrategy>,
}

/// Every key understood by [`FileConfig::get`] and [`FileConfig::set`].
pub const KNOWN_KEYS: &[&str] = &["save.strategy"];

/// Config spelling of a strategy.
pub fn strategy_name(strategy: SaveStrategy) -> &'static str {
    match strategy {
        SaveStrategy::Replace => "replace",
        SaveStrategy::Atomic => "atomic",
    }
}

fn parse_strategy(value: &str) -> Result<SaveStrategy, ConfigError> {
    match value {
        "replace" => Ok(SaveStrategy::Replace),
        "atomic" => Ok(SaveStrategy::Atomic),
        other => Err(ConfigError::InvalidValue(format!(
            "invalid save strategy '{}', must be one of: replace, atomic",
            other
        ))),
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::InvalidValue(format!(
        "unknown configuration key '{}' (valid: {})",
        key,
        KNOWN_KEYS.join(", ")
    ))
}
