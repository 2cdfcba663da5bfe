/*!
 * Error types for the srtforge application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when handling configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when a configuration value violates its contract
    #[error("Invalid configuration value for {field}: {message}")]
    InvalidValue {
        /// Name of the offending field
        field: String,
        /// Description of the violation
        message: String,
    },

    /// Error when reading or parsing a configuration file
    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),
}

/// Errors that can occur when handling transcript input
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// Error when parsing transcript JSON fails
    #[error("Failed to parse transcript: {0}")]
    ParseError(String),

    /// Error when the transcript duration is unusable
    #[error("Invalid transcript duration: {0}")]
    InvalidDuration(f64),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration handling
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Error from transcript handling
    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
