//! The adapter boundary in front of the runner.
//!
//! Views never talk to a runner directly. They hand source and scope to
//! [`SandboxAdapter::evaluate`] and get back an [`Evaluation`], which is
//! either rendered output or an inline failure message. No fault crosses
//! this boundary: runner errors become `Failed`, and so does a runner panic.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::runner::{SnippetRunner, StoreScriptRunner};
use crate::scope::Scope;

/// What a snippet evaluation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// The run succeeded; `output` is the transcript text.
    Rendered { output: String },
    /// The run failed; `message` is shown inline next to the snippet.
    Failed { message: String },
}

impl Evaluation {
    pub fn is_failed(&self) -> bool {
        matches!(self, Evaluation::Failed { .. })
    }
}

/// Boundary wrapper around a [`SnippetRunner`].
pub struct SandboxAdapter {
    runner: Box<dyn SnippetRunner + Send + Sync>,
}

impl SandboxAdapter {
    pub fn new(runner: Box<dyn SnippetRunner + Send + Sync>) -> Self {
        Self { runner }
    }

    /// The built-in store-script runner.
    pub fn store_script() -> Self {
        Self::new(Box::new(StoreScriptRunner))
    }

    /// Run a snippet. Never panics and never returns an error type; every
    /// fault, including a panic inside the runner, comes back as
    /// [`Evaluation::Failed`].
    pub fn evaluate(&self, source: &str, scope: &Scope) -> Evaluation {
        let outcome = catch_unwind(AssertUnwindSafe(|| self.runner.run(source, scope)));
        match outcome {
            Ok(Ok(transcript)) => Evaluation::Rendered {
                output: transcript.render(),
            },
            Ok(Err(error)) => {
                tracing::debug!(%error, "snippet failed");
                Evaluation::Failed {
                    message: error.to_string(),
                }
            }
            Err(_) => {
                tracing::warn!("snippet runner panicked; converted to inline failure");
                Evaluation::Failed {
                    message: "the sandbox crashed while running this snippet".to_string(),
                }
            }
        }
    }
}

impl Default for SandboxAdapter {
    fn default() -> Self {
        Self::store_script()
    }
}

impl std::fmt::Debug for SandboxAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SandboxAdapter").finish_non_exhaustive()
    }
}
