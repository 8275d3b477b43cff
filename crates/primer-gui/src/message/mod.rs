//! Message module for State Primer.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and events flow through these message types.

pub mod home;
pub mod topic;

use iced::keyboard;

use primer_content::Route;

use crate::component::ToastMessage;
use crate::theme::ThemeMode;

pub use home::HomeMessage;
pub use topic::TopicMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Go to a route (resolved against the catalog; misses land on the
    /// not-found view)
    Navigate(Route),

    /// Return to the previous route
    Back,

    // =========================================================================
    // View-specific messages
    // =========================================================================
    /// Landing page messages
    Home(HomeMessage),

    /// Lesson page messages
    Topic(TopicMessage),

    // =========================================================================
    // Theme
    // =========================================================================
    /// Theme picked from the appearance menu
    ThemeSelected(ThemeMode),

    /// The operating system theme preference changed
    SystemThemeChanged(iced::theme::Mode),

    // =========================================================================
    // Global events
    // =========================================================================
    /// Keyboard event
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// Open an external link in the browser
    OpenUrl(String),

    /// Toast notifications
    Toast(ToastMessage),

    /// No operation - used for placeholder actions
    Noop,
}
