//! The snippet sandbox for State Primer.
//!
//! Runnable code samples in the study guide are store scripts: a few lines
//! that create stores, dispatch actions, and print state. This crate parses
//! and runs them against a closed per-snippet [`Scope`] of built-in reducers
//! and wraps the whole thing in a fault-containing [`SandboxAdapter`], so a
//! broken snippet renders an inline failure instead of taking the page down.
//!
//! # Module Organization
//!
//! - [`adapter`] - [`SandboxAdapter`] and [`Evaluation`]
//! - [`runner`] - [`SnippetRunner`] trait, [`StoreScriptRunner`], [`Transcript`]
//! - [`script`] - Statement parsing
//! - [`reducers`] - The built-in reducer set
//! - [`scope`] - Closed per-snippet name binding
//! - [`error`] - [`RunnerError`]

pub mod adapter;
pub mod error;
pub mod reducers;
pub mod runner;
pub mod scope;
pub mod script;

pub use adapter::{Evaluation, SandboxAdapter};
pub use error::{Result, RunnerError};
pub use reducers::ReducerKind;
pub use runner::{SnippetRunner, StoreScriptRunner, Transcript};
pub use scope::Scope;
