//! Error types for cognito-tag.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cognito-tag.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ───────────────────────────────────────────────────────
    /// Cognito rejected the request or demanded an unsupported challenge.
    #[error("Cognito error {kind}: {message}")]
    Cognito {
        /// Exception type from the error envelope (or the challenge name).
        kind: String,
        /// Message from Cognito.
        message: String,
    },

    /// Cognito accepted the request but the response lacked expected fields.
    #[error("Malformed Cognito response: {0}")]
    MalformedResponse(String),

    /// Missing or empty required tag argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    // ── Storage ──────────────────────────────────────────────────────────────
    /// Storage I/O error.
    #[error("Storage I/O error at {path}: {message}")]
    StorageIo {
        /// Path that caused the error.
        path: PathBuf,
        /// Error description.
        message: String,
    },

    /// Storage serialization error.
    #[error("Storage serialization error: {0}")]
    StorageSerialization(String),

    /// Keyring backend error.
    #[error("Keyring error: {0}")]
    Keyring(String),

    /// Generic storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    // ── Infrastructure ───────────────────────────────────────────────────────
    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a storage I/O error.
    #[must_use]
    pub fn storage_io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::StorageIo {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a Cognito error.
    #[must_use]
    pub fn cognito(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Cognito {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Convenience type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::cognito("NotAuthorizedException", "Incorrect username or password.");
        assert_eq!(
            err.to_string(),
            "Cognito error NotAuthorizedException: Incorrect username or password."
        );

        let err = Error::MissingArgument("Username".into());
        assert_eq!(err.to_string(), "Missing required argument: Username");
    }

    #[test]
    fn test_storage_io_helper() {
        let err = Error::storage_io("/tmp/cache.json", "permission denied");
        assert!(err.to_string().contains("/tmp/cache.json"));
        assert!(err.to_string().contains("permission denied"));
    }
}
