//! Embedded topic documents.
//!
//! The whole catalog is compiled in via `include_str!()`: no runtime file
//! I/O, no path resolution, and the registry can be constructed before any
//! window exists. Documents are TOML; see [`crate::raw`] for the schema.

// =============================================================================
// Core Concepts
// =============================================================================

/// The store: state container and its three-function API.
pub const STORE: &str = include_str!("../content/store.toml");

/// Actions: plain data describing what happened.
pub const ACTIONS: &str = include_str!("../content/actions.toml");

/// Reducers: pure functions from (state, action) to state.
pub const REDUCERS: &str = include_str!("../content/reducers.toml");

/// One-way data flow tying the three together.
pub const DATA_FLOW: &str = include_str!("../content/data-flow.toml");

// =============================================================================
// Middleware
// =============================================================================

/// The middleware pipeline (parent topic).
pub const MIDDLEWARE: &str = include_str!("../content/middleware.toml");

/// Logging middleware walkthrough.
pub const LOGGER_MIDDLEWARE: &str = include_str!("../content/logger-middleware.toml");

/// Async work behind dispatch.
pub const ASYNC_MIDDLEWARE: &str = include_str!("../content/async-middleware.toml");

// =============================================================================
// Advanced Patterns
// =============================================================================

/// Splitting and composing reducers.
pub const STORE_COMPOSITION: &str = include_str!("../content/store-composition.toml");

/// Undo and redo as plain state.
pub const UNDO_HISTORY: &str = include_str!("../content/undo-history.toml");

// =============================================================================
// Implementation, Normalization, Selectors
// =============================================================================

/// Writing a store from scratch.
pub const STORE_INTERNALS: &str = include_str!("../content/store-internals.toml");

/// Normalizing relational state.
pub const NORMALIZED_STATE: &str = include_str!("../content/normalized-state.toml");

/// Memoized derived data.
pub const MEMOIZED_SELECTORS: &str = include_str!("../content/memoized-selectors.toml");

/// Every embedded document, paired with its file name for error reporting.
pub fn documents() -> [(&'static str, &'static str); 12] {
    [
        ("store.toml", STORE),
        ("actions.toml", ACTIONS),
        ("reducers.toml", REDUCERS),
        ("data-flow.toml", DATA_FLOW),
        ("middleware.toml", MIDDLEWARE),
        ("logger-middleware.toml", LOGGER_MIDDLEWARE),
        ("async-middleware.toml", ASYNC_MIDDLEWARE),
        ("store-composition.toml", STORE_COMPOSITION),
        ("undo-history.toml", UNDO_HISTORY),
        ("store-internals.toml", STORE_INTERNALS),
        ("normalized-state.toml", NORMALIZED_STATE),
        ("memoized-selectors.toml", MEMOIZED_SELECTORS),
    ]
}
