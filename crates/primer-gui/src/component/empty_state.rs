//! Empty state shown when a search or filter yields nothing.

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length, Theme};

use crate::theme::{SPACING_MD, SPACING_SM, button_secondary};

/// Centered icon, message, and optional recovery action.
pub struct EmptyState<'a, M> {
    icon: Element<'a, M>,
    title: String,
    description: Option<String>,
    action: Option<(String, M)>,
}

impl<'a, M: Clone + 'a> EmptyState<'a, M> {
    pub fn new(icon: impl Into<Element<'a, M>>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
            action: None,
        }
    }

    /// Add a hint line below the title.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a recovery action button.
    pub fn action(mut self, label: impl Into<String>, message: M) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        let mut content = column![self.icon, Space::new().height(SPACING_MD)]
            .push(text(self.title).size(15));

        if let Some(description) = self.description {
            content = content
                .push(Space::new().height(SPACING_SM))
                .push(text(description).size(13).style(|theme: &Theme| {
                    iced::widget::text::Style {
                        color: Some(theme.extended_palette().secondary.base.color),
                    }
                }));
        }

        if let Some((label, message)) = self.action {
            content = content.push(Space::new().height(SPACING_MD)).push(
                button(text(label).size(13))
                    .on_press(message)
                    .padding([6.0, 14.0])
                    .style(button_secondary),
            );
        }

        container(content.align_x(Alignment::Center))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(220.0))
            .into()
    }
}
