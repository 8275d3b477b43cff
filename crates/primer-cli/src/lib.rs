//! Terminal companion for the State Primer catalog.
//!
//! The `primer` binary reads the same embedded topic catalog as the desktop
//! app and exposes it headlessly: list and search topics, print a lesson in
//! full, or push a runnable snippet through the sandbox from a shell.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
