//! Error types for janus-core

use std::path::PathBuf;

/// Result type for janus-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in janus-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found at expected path
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file could not be parsed as JSON
    #[error("Invalid JSON in config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Configuration parsed but violates the schema
    #[error("Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// Shell hook block already present in the RC file
    #[error("Hook already installed in {path}. Use uninstall first.")]
    HookAlreadyInstalled { path: PathBuf },

    /// Shell hook block not present in the RC file
    #[error("Hook not installed in {path}")]
    HookNotInstalled { path: PathBuf },

    /// Shell RC file does not exist
    #[error("RC file not found: {path}")]
    RcFileNotFound { path: PathBuf },

    /// Target executable could not be started
    #[error("Failed to launch {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }
}
