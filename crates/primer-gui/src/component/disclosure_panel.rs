//! Expandable disclosure panel for optional deep-dive content.
//!
//! The summary line is always visible and toggles the panel; the body is
//! only rendered while expanded. Expansion is per view instance, so every
//! lesson entry starts with all panels collapsed.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length, Padding};
use iced_fonts::lucide;

use primer_model::PanelSpec;

use crate::theme::{SPACING_SM, SPACING_XS, button_ghost, card_container};

/// A collapsed-by-default panel with a clickable summary row.
pub struct DisclosurePanel<'a, M> {
    panel: &'a PanelSpec,
    body: Option<Element<'a, M>>,
    on_toggle: M,
}

impl<'a, M: Clone + 'a> DisclosurePanel<'a, M> {
    pub fn new(panel: &'a PanelSpec, on_toggle: M) -> Self {
        Self {
            panel,
            body: None,
            on_toggle,
        }
    }

    /// Expand the panel with its rendered body content.
    pub fn body(mut self, body: Element<'a, M>) -> Self {
        self.body = Some(body);
        self
    }

    /// Build the panel element.
    pub fn view(self) -> Element<'a, M> {
        let chevron = if self.body.is_some() {
            lucide::chevron_down().size(14)
        } else {
            lucide::chevron_right().size(14)
        };

        let header = button(
            row![chevron, text(&self.panel.summary).size(14)]
                .spacing(SPACING_SM)
                .align_y(Alignment::Center),
        )
        .on_press(self.on_toggle)
        .padding([8.0, 10.0])
        .width(Length::Fill)
        .style(button_ghost);

        let mut content = column![header];
        if let Some(body) = self.body {
            // Indent under the summary text, past the chevron.
            content = content.push(
                container(body).padding(Padding::new(SPACING_SM + SPACING_XS).left(32.0).top(0.0)),
            );
        }

        container(content)
            .padding(SPACING_XS)
            .width(Length::Fill)
            .style(card_container)
            .into()
    }
}
