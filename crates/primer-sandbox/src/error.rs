//! Runner error types.
//!
//! Display strings double as the inline failure text shown next to a
//! snippet, so they stay short, name the offender, and skip jargon.

use thiserror::Error;

/// Everything that can go wrong while running a snippet.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RunnerError {
    /// Nothing but blank lines and comments.
    #[error("nothing to run yet - the snippet is empty")]
    EmptySource,

    /// A statement did not match the small script vocabulary.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A name was used that this snippet's scope does not provide.
    #[error("`{name}` is not defined in this sandbox")]
    UndefinedName { name: String },

    /// A reducer rejected the state/action it was given.
    #[error("line {line}: {message}")]
    Apply { line: usize, message: String },
}

impl RunnerError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        RunnerError::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn apply(line: usize, message: impl Into<String>) -> Self {
        RunnerError::Apply {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn undefined(name: impl Into<String>) -> Self {
        RunnerError::UndefinedName { name: name.into() }
    }
}

/// Result type for runner operations.
pub type Result<T> = std::result::Result<T, RunnerError>;
