//! Global keyboard shortcuts.
//!
//! Handles:
//! - Escape (close the all-topics drawer, else go back)
//! - Left/Right arrows (previous/next section of the open lesson)

use iced::Task;
use iced::keyboard;
use iced::keyboard::key::Named;

use crate::app::App;
use crate::handler::{MessageHandler, TopicHandler, go_back};
use crate::message::{Message, TopicMessage};
use crate::state::ViewState;

impl App {
    /// Handle keyboard shortcuts.
    #[allow(clippy::needless_pass_by_value)]
    pub(crate) fn handle_key_press(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        // Leave modified keys to the OS and to text inputs.
        if modifiers.command() || modifiers.alt() {
            return Task::none();
        }

        match key.as_ref() {
            // Escape: shed one layer at a time, drawer before history.
            keyboard::Key::Named(Named::Escape) => {
                if let ViewState::Topic(lesson) = &mut self.state.view
                    && lesson.menu_open
                {
                    lesson.menu_open = false;
                    return Task::none();
                }
                go_back(&mut self.state)
            }

            keyboard::Key::Named(Named::ArrowLeft) => self.jump_section(false),
            keyboard::Key::Named(Named::ArrowRight) => self.jump_section(true),

            _ => Task::none(),
        }
    }

    /// Step to the neighboring section of the open lesson, if there is one.
    fn jump_section(&mut self, forward: bool) -> Task<Message> {
        let target = {
            let ViewState::Topic(lesson) = &self.state.view else {
                return Task::none();
            };
            let Some(active) = lesson.active_section.as_deref() else {
                return Task::none();
            };
            let neighbor = if forward {
                lesson.anchors.next_section(active)
            } else {
                lesson.anchors.previous_section(active)
            };
            let Some(id) = neighbor else {
                return Task::none();
            };
            id.to_string()
        };

        TopicHandler.handle(&mut self.state, TopicMessage::SectionClicked(target))
    }
}
