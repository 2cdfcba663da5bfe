use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the subtitle generation configuration including
/// loading, validating and saving configuration settings.
/// Represents the subtitle generation configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Maximum characters per rendered subtitle line
    #[serde(default = "default_max_chars_per_line")]
    pub max_chars_per_line: usize,

    /// Maximum lines per subtitle cue
    #[serde(default = "default_max_lines_per_subtitle")]
    pub max_lines_per_subtitle: usize,

    /// Minimum pause between cues in seconds
    #[serde(default = "default_min_pause_duration")]
    pub min_pause_duration: f64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration values, failing fast on contract violations
    pub fn validate(&self) -> Result<()> {
        if self.max_chars_per_line == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_chars_per_line".to_string(),
                message: "must be a positive integer".to_string(),
            }
            .into());
        }

        if self.max_lines_per_subtitle == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_lines_per_subtitle".to_string(),
                message: "must be a positive integer".to_string(),
            }
            .into());
        }

        if !self.min_pause_duration.is_finite() || self.min_pause_duration < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "min_pause_duration".to_string(),
                message: format!(
                    "must be a non-negative number, got {}",
                    self.min_pause_duration
                ),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_chars_per_line: default_max_chars_per_line(),
            max_lines_per_subtitle: default_max_lines_per_subtitle(),
            min_pause_duration: default_min_pause_duration(),
            log_level: LogLevel::default(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_max_chars_per_line() -> usize {
    42
}

fn default_max_lines_per_subtitle() -> usize {
    2
}

fn default_min_pause_duration() -> f64 {
    0.5
}
