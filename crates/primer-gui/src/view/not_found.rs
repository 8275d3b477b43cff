//! Dead-end page for routes that resolve to nothing.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use primer_content::Route;

use crate::message::Message;
use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS, button_primary, code_container};

/// Render the not-found page. Owns its strings so callers can pass a
/// freshly built path.
pub fn view_not_found(path: &str) -> Element<'static, Message> {
    let home_button = button(
        row![lucide::house().size(14), text("Take me home").size(14)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Navigate(Route::Home))
    .padding([SPACING_SM, SPACING_MD])
    .style(button_primary);

    let content = column![
        lucide::search_x()
            .size(40)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().secondary.base.color),
            }),
        text("Nothing lives here").size(20),
        row![
            text("No topic answers to").size(13),
            container(text(path.to_owned()).size(13).font(iced::Font::MONOSPACE))
                .padding([2.0, SPACING_XS])
                .style(code_container),
        ]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center),
        home_button,
    ]
    .spacing(SPACING_MD)
    .align_x(Alignment::Center);

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
