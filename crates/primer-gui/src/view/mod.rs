//! View module for State Primer.
//!
//! Views are pure functions from state to widget tree; every interaction
//! comes back through [`crate::message::Message`].
//!
//! - `home` - Landing page with search, filters, and the topic catalog
//! - `topic` - A lesson: sections, quizzes, runnable snippets, panels
//! - `not_found` - Dead end for unresolvable routes

mod home;
mod not_found;
mod topic;

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::error::GuiError;
use crate::message::Message;
use crate::theme::SPACING_MD;

pub use home::view_home;
pub use not_found::view_not_found;
pub use topic::{lesson_scroll_id, view_topic};

/// Full-screen notice when the embedded catalog failed to load. There is
/// nothing to navigate to at this point, so no actions are offered.
pub fn view_startup_error(error: &GuiError) -> Element<'_, Message> {
    let mut content = column![
        lucide::circle_alert()
            .size(44)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().danger.base.color),
            }),
        text("The lesson catalog failed to load").size(20),
        text(error.to_string())
            .size(13)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().secondary.base.color),
            }),
    ]
    .spacing(SPACING_MD)
    .align_x(Alignment::Center);

    if let Some(hint) = error.suggestion() {
        content = content.push(text(hint).size(13));
    }

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
