//! Landing page message handler.
//!
//! The landing page is stateless apart from its query, so every message
//! here is a pure state edit; filtering itself happens in the view pass
//! against the immutable registry.

use iced::Task;

use primer_content::TopicQuery;

use super::MessageHandler;
use crate::message::{HomeMessage, Message};
use crate::state::{AppState, ViewState};

/// Handler for landing page messages: search text and category filter.
pub struct HomeHandler;

impl MessageHandler<HomeMessage> for HomeHandler {
    fn handle(&self, state: &mut AppState, msg: HomeMessage) -> Task<Message> {
        let ViewState::Home(home) = &mut state.view else {
            return Task::none();
        };

        match msg {
            HomeMessage::SearchChanged(text) => home.query.text = text,
            HomeMessage::CategorySelected(filter) => home.query.category = filter,
            HomeMessage::FiltersCleared => home.query = TopicQuery::default(),
        }
        Task::none()
    }
}
