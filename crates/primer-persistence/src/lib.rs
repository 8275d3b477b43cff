//! Preference persistence for State Primer.
//!
//! A deliberately small surface: a string key-value contract
//! ([`KeyValueStore`]), a file-backed implementation with a session-only
//! fallback, and the whitelisted state slice that survives restarts.
//!
//! # Keys
//!
//! Two keys are in use. [`THEME_KEY`] holds the theme choice as a bare
//! string. [`STATE_KEY`] holds the application-state slice as JSON; the
//! version suffix on the key lets a future incompatible slice move to a new
//! key and leave old payloads behind rather than migrate them.

pub mod error;
pub mod slice;
pub mod store;

pub use error::{PersistError, Result};
pub use slice::PersistedState;
pub use store::{FileStore, KeyValueStore, MemoryStore, open_with_fallback};

/// Key for the persisted theme choice (`light`, `dark`, or `system`).
pub const THEME_KEY: &str = "theme";

/// Versioned key for the persisted application-state slice.
pub const STATE_KEY: &str = "app-state.v1";
