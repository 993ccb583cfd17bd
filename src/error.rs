//! Error types for call number configuration.
//!
//! The call number engine itself never fails: unparseable numbers are
//! reclassified and over-eager lops are rejected. Errors only arise while
//! loading or validating an [`ItemConfig`](crate::config::ItemConfig).

use thiserror::Error;

/// Error type for all fallible library operations.
#[derive(Error, Debug)]
pub enum CallNumError {
    /// Configuration values that parse but make no sense.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed JSON configuration.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while reading a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`CallNumError`].
pub type Result<T> = std::result::Result<T, CallNumError>;
