//! Error types for shellcoach
//!
//! Provides a unified error type used across the shellcoach crates. The
//! interpreter itself has no fatal failure paths; this covers the concerns
//! around it (logging setup, transcript IO in the replay tool, config).

use std::path::PathBuf;

/// Main error type for shellcoach operations
#[derive(Debug, thiserror::Error)]
pub enum CoachError {
    // === IO Errors ===

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    // === Configuration Errors ===

    #[error("Configuration error: {0}")]
    Config(String),

    // === Internal Errors ===

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoachError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type alias using CoachError
pub type Result<T> = std::result::Result<T, CoachError>;
