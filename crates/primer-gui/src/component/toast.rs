//! Toast notification component.
//!
//! Shows a temporary notification that auto-dismisses after a timeout
//! (driven by a subscription in the app) or when the user closes it.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::message::Message;
use crate::theme::{BORDER_RADIUS_LG, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost};

/// Toast notification state.
#[derive(Debug, Clone)]
pub struct ToastState {
    /// The message to display.
    pub message: String,
    /// Determines the icon and accent color.
    pub toast_type: ToastType,
}

/// Type of toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Info,
    Success,
    Warning,
}

/// Toast message for handling toast events.
#[derive(Debug, Clone)]
pub enum ToastMessage {
    /// Dismiss the toast.
    Dismiss,
}

impl ToastState {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Info,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Success,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Warning,
        }
    }
}

/// Renders a toast notification, positioned by the caller.
pub fn view_toast(state: &ToastState) -> Element<'_, Message> {
    let toast_type = state.toast_type;

    let icon = match toast_type {
        ToastType::Info => lucide::info(),
        ToastType::Success => lucide::circle_check(),
        ToastType::Warning => lucide::triangle_alert(),
    }
    .size(18)
    .style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        let color = match toast_type {
            ToastType::Info => palette.primary.base.color,
            ToastType::Success => palette.success.base.color,
            ToastType::Warning => palette.warning.base.color,
        };
        iced::widget::text::Style { color: Some(color) }
    });

    let dismiss = button(lucide::x().size(14))
        .on_press(Message::Toast(ToastMessage::Dismiss))
        .style(button_ghost)
        .padding(SPACING_XS);

    let content = row![
        icon,
        Space::new().width(SPACING_SM),
        text(&state.message).size(14),
        Space::new().width(SPACING_SM),
        dismiss,
    ]
    .align_y(Alignment::Center);

    container(content)
        .padding([SPACING_SM, SPACING_MD])
        .width(Length::Shrink)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.weak.color.into()),
                border: iced::Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: BORDER_RADIUS_LG.into(),
                },
                shadow: iced::Shadow {
                    color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                    offset: iced::Vector::new(0.0, 2.0),
                    blur_radius: 8.0,
                },
                ..Default::default()
            }
        })
        .into()
}
