//! Application subscriptions.
//!
//! Keyboard events are always on; the rest are conditional so an idle app
//! polls nothing.
//!
//! | Subscription | Condition | Purpose |
//! |--------------|-----------|---------|
//! | Keyboard | Always | Escape and arrow-key navigation |
//! | System theme | `ThemeMode::System` | Follow the OS light/dark switch |
//! | Toast dismiss | Toast visible | Auto-dismiss after 5 seconds |

use std::time::Duration;

use iced::Subscription;
use iced::keyboard;
use iced::{system, time};

use crate::component::ToastMessage;
use crate::message::Message;
use crate::state::AppState;
use crate::theme::ThemeMode;

/// Build the subscription set for the current state.
pub fn create_subscription(state: &AppState) -> Subscription<Message> {
    Subscription::batch([
        keyboard_subscription(),
        system_theme_subscription(state),
        toast_subscription(state),
    ])
}

/// Key presses feed the global shortcut handler.
fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
        _ => Message::Noop,
    })
}

/// OS light/dark changes only matter while the theme follows the system.
fn system_theme_subscription(state: &AppState) -> Subscription<Message> {
    if state.theme_mode == ThemeMode::System {
        system::theme_changes().map(Message::SystemThemeChanged)
    } else {
        Subscription::none()
    }
}

/// Auto-dismiss tick, only while a toast is on screen.
fn toast_subscription(state: &AppState) -> Subscription<Message> {
    if state.toast.is_some() {
        time::every(Duration::from_secs(5)).map(|_| Message::Toast(ToastMessage::Dismiss))
    } else {
        Subscription::none()
    }
}
