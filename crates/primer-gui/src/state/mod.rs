//! Application state management.
//!
//! - [`AppState`]: root state (catalog, preferences, current view)
//! - [`ViewState`]: current view with its scoped UI state
//! - [`scroll`]: reading progress and section anchor math

mod app_state;
pub mod scroll;
mod view_state;

pub use app_state::AppState;
pub use scroll::{SectionAnchors, scroll_progress};
pub use view_state::{HomeViewState, TopicViewState, ViewState};
