//! Structured error types for contactctl-core.
//!
//! Uses `thiserror` so library consumers get composable errors.
//! The binary (contactctl-cli) wraps these with `anyhow` context.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for contactctl-core operations
#[derive(Error, Debug)]
pub enum ContactError {
    /// Transport-level failure talking to the endpoint
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-success status
    #[error("Unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    /// Response or file body was not a contact array
    #[error("JSON error at {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Local contacts file does not exist
    #[error("Path not found: {path:?}")]
    PathNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// No record with this id in the loaded list
    #[error("Contact not found: {id}")]
    NotFound { id: u64 },
}

/// Result type alias for contactctl-core operations
pub type Result<T> = std::result::Result<T, ContactError>;

impl ContactError {
    pub fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.into(),
            source,
        }
    }

    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    pub fn not_found(id: u64) -> Self {
        Self::NotFound { id }
    }
}
