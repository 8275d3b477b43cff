//! Persistence error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the key-value store.
///
/// Callers treat every variant the same way: log, fall back to in-memory
/// defaults, keep going. Nothing here is allowed to block the application.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PersistError {
    /// No usable config directory on this platform.
    #[error("no writable config directory is available")]
    Unavailable,

    /// File I/O failed.
    #[error("failed to {operation} {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store map would not serialize.
    #[error("failed to serialize the preference store")]
    Serialize {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl PersistError {
    pub(crate) fn io(
        operation: &'static str,
        path: &std::path::Path,
        source: std::io::Error,
    ) -> Self {
        PersistError::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, PersistError>;
