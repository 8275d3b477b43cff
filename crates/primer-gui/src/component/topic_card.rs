//! Topic card for the landing page catalog.

use iced::widget::{Space, button, column, row, text};
use iced::{Alignment, Border, Color, Element, Length, Shadow, Theme, Vector};
use iced_fonts::lucide;

use primer_model::TopicRecord;

use crate::theme::{BORDER_RADIUS_MD, SPACING_SM, SPACING_XS};

/// A clickable card showing a topic's title, description, and metadata.
///
/// # Example
/// ```ignore
/// TopicCard::new(topic, Message::Navigate(route))
///     .children(child_count)
///     .recent(is_recent)
///     .view()
/// ```
pub struct TopicCard<'a, M> {
    topic: &'a TopicRecord,
    on_open: M,
    child_count: usize,
    recent: bool,
}

impl<'a, M: Clone + 'a> TopicCard<'a, M> {
    pub fn new(topic: &'a TopicRecord, on_open: M) -> Self {
        Self {
            topic,
            on_open,
            child_count: 0,
            recent: false,
        }
    }

    /// Number of child lessons nested under this topic.
    pub fn children(mut self, count: usize) -> Self {
        self.child_count = count;
        self
    }

    /// Mark the card with a "New" badge.
    pub fn recent(mut self, recent: bool) -> Self {
        self.recent = recent;
        self
    }

    /// Build the card element.
    pub fn view(self) -> Element<'a, M> {
        let mut title_row = row![text(&self.topic.title).size(16)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center);

        if self.recent {
            title_row = title_row.push(Space::new().width(Length::Fill));
            title_row = title_row.push(
                text("New")
                    .size(11)
                    .style(|theme: &Theme| iced::widget::text::Style {
                        color: Some(theme.extended_palette().primary.base.color),
                    }),
            );
        }

        let description = text(&self.topic.description)
            .size(13)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().secondary.base.color),
            });

        let mut content = column![title_row, description].spacing(SPACING_XS);

        if self.child_count > 0 {
            let caption = format!(
                "{} sub-topic{}",
                self.child_count,
                if self.child_count == 1 { "" } else { "s" }
            );
            content = content.push(
                row![
                    lucide::corner_down_right().size(12),
                    text(caption).size(12),
                ]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
            );
        }

        button(content.width(Length::Fill))
            .on_press(self.on_open)
            .padding(SPACING_SM + SPACING_XS)
            .width(Length::Fill)
            .style(|theme: &Theme, status| {
                let palette = theme.extended_palette();
                let (background, border_color) = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        (palette.background.weak.color, palette.primary.base.color)
                    }
                    _ => (palette.background.base.color, palette.background.strong.color),
                };
                button::Style {
                    background: Some(background.into()),
                    text_color: palette.background.base.text,
                    border: Border {
                        radius: BORDER_RADIUS_MD.into(),
                        width: 1.0,
                        color: border_color,
                    },
                    shadow: Shadow {
                        color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
                        offset: Vector::new(0.0, 1.0),
                        blur_radius: 2.0,
                    },
                    ..Default::default()
                }
            })
            .into()
    }
}
