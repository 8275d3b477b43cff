//! State Primer - GUI library.
//!
//! The desktop shell for the study guide, built with Iced 0.14.0 using the
//! Elm architecture (State, Message, Update, View).
//!
//! - [`app`] - The application shell: update loop, subscriptions, shortcuts
//! - [`state`] - Application state and per-view UI state
//! - [`message`] - The message hierarchy
//! - [`handler`] - Message handlers, one per message family
//! - [`view`] - Pure view functions
//! - [`component`] - Reusable widgets shared by the views
//! - [`theme`] - Palettes, spacing, and widget styles

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;
