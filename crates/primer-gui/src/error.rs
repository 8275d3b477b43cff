//! GUI-specific error types.

use thiserror::Error;

/// Errors surfaced to the user by the GUI shell.
///
/// Most recoverable problems (a missing preference file, a snippet that
/// fails to run) are handled in place; these variants cover the cases that
/// need a dedicated screen or banner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    /// The embedded lesson catalog failed validation at startup.
    #[error("Failed to load the lesson catalog: {reason}")]
    CatalogLoad { reason: String },

    /// Internal error (should not normally occur).
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl GuiError {
    /// Create a catalog load error from any error source.
    pub fn catalog_load(err: impl std::fmt::Display) -> Self {
        Self::CatalogLoad {
            reason: err.to_string(),
        }
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::CatalogLoad { .. } => {
                Some("The installed build appears to be damaged. Reinstalling should fix it.")
            }
            Self::Internal { .. } => None,
        }
    }
}
