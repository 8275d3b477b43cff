//! Application shell around the update loop.
//!
//! [`App`] owns the [`AppState`] and routes every [`Message`] to the
//! handlers in [`crate::handler`]. Rendering dispatches on [`ViewState`];
//! the startup error screen and the toast overlay wrap around whatever the
//! current view produces.

mod keyboard;
mod subscription;

use iced::widget::{Space, column, container, row, stack};
use iced::{Element, Length, Subscription, Task};

use primer_content::Route;

use crate::component::{ToastMessage, view_toast};
use crate::handler::{HomeHandler, MessageHandler, TopicHandler, go_back, navigate};
use crate::message::Message;
use crate::state::{AppState, ViewState};
use crate::theme::{SPACING_LG, primer_theme};
use crate::view;

/// The application.
pub struct App {
    state: AppState,
}

impl App {
    /// Load state and pick up where the previous session left off.
    pub fn new() -> (Self, Task<Message>) {
        let state = AppState::load();

        // Restoring the home route would only re-run the default view.
        let restore = state
            .persisted
            .last_route
            .as_deref()
            .and_then(|path| Route::parse(path).ok())
            .filter(|route| *route != Route::Home)
            .map(|route| Task::done(Message::Navigate(route)))
            .unwrap_or_else(Task::none);

        (Self { state }, restore)
    }

    /// Window title, reflecting the open lesson.
    pub fn title(&self) -> String {
        match &self.state.view {
            ViewState::Home(_) => String::from("State Primer"),
            ViewState::Topic(lesson) => match self.state.registry.get(&lesson.topic_id) {
                Ok(topic) => format!("{} - State Primer", topic.title),
                Err(_) => String::from("State Primer"),
            },
            ViewState::NotFound { .. } => String::from("Not Found - State Primer"),
        }
    }

    /// Route a message to its handler.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Navigation
            // =================================================================
            Message::Navigate(route) => navigate(&mut self.state, &route),
            Message::Back => go_back(&mut self.state),

            // =================================================================
            // View-specific messages
            // =================================================================
            Message::Home(msg) => HomeHandler.handle(&mut self.state, msg),
            Message::Topic(msg) => TopicHandler.handle(&mut self.state, msg),

            // =================================================================
            // Theme
            // =================================================================
            Message::ThemeSelected(mode) => {
                self.state.theme_mode = mode;
                self.state.persist_theme();
                Task::none()
            }
            Message::SystemThemeChanged(mode) => {
                self.state.system_is_dark = matches!(mode, iced::theme::Mode::Dark);
                Task::none()
            }

            // =================================================================
            // Global events
            // =================================================================
            Message::KeyPressed(key, modifiers) => self.handle_key_press(key, modifiers),
            Message::OpenUrl(url) => {
                let _ = open::that(&url);
                Task::none()
            }
            Message::Toast(ToastMessage::Dismiss) => {
                self.state.toast = None;
                Task::none()
            }
            Message::Noop => Task::none(),
        }
    }

    /// Render the current view, with the toast overlay on top when present.
    pub fn view(&self) -> Element<'_, Message> {
        if let Some(error) = &self.state.startup_error {
            return view::view_startup_error(error);
        }

        let screen = match &self.state.view {
            ViewState::Home(home) => view::view_home(&self.state, home),
            ViewState::Topic(lesson) => view::view_topic(&self.state, lesson),
            ViewState::NotFound { path } => view::view_not_found(path),
        };

        let Some(toast) = &self.state.toast else {
            return screen;
        };

        // Bottom-right corner, floating over the view.
        let overlay = column![
            Space::new().height(Length::Fill),
            row![
                Space::new().width(Length::Fill),
                container(view_toast(toast)).padding(SPACING_LG),
            ],
        ];

        stack![
            container(screen).width(Length::Fill).height(Length::Fill),
            overlay,
        ]
        .into()
    }

    /// Theme derived from the picked mode and the OS preference.
    pub fn theme(&self) -> iced::Theme {
        primer_theme(self.state.theme_mode, self.state.system_is_dark)
    }

    /// Event subscriptions for the current state.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}
