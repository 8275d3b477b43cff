//! Code sample block with run and copy actions.
//!
//! Renders a monospace listing with an action row. Runnable samples get a
//! Run button; the sandbox transcript (or failure notice) appears below
//! the listing once a run completes. The Copy button flips to a "Copied"
//! badge while the confirmation timer is live.

use iced::widget::{Space, button, column, container, row, rule, text};
use iced::{Alignment, Element, Font, Length, Theme};
use iced_fonts::lucide;

use primer_model::CodeSample;
use primer_sandbox::Evaluation;

use crate::theme::{SPACING_SM, SPACING_XS, button_primary, button_secondary, code_container};

/// A code listing with its action row and any sandbox output.
pub struct CodeBlock<'a, M> {
    sample: &'a CodeSample,
    evaluation: Option<&'a Evaluation>,
    copied: bool,
    on_run: Option<M>,
    on_copy: M,
}

impl<'a, M: Clone + 'a> CodeBlock<'a, M> {
    pub fn new(sample: &'a CodeSample, on_copy: M) -> Self {
        Self {
            sample,
            evaluation: None,
            copied: false,
            on_run: None,
            on_copy,
        }
    }

    /// Offer a Run button. Only meaningful for runnable samples.
    pub fn runnable(mut self, on_run: M) -> Self {
        self.on_run = Some(on_run);
        self
    }

    /// Latest sandbox outcome for this sample, if it has been run.
    pub fn evaluation(mut self, evaluation: Option<&'a Evaluation>) -> Self {
        self.evaluation = evaluation;
        self
    }

    /// Show the copy confirmation badge instead of the Copy label.
    pub fn copied(mut self, copied: bool) -> Self {
        self.copied = copied;
        self
    }

    /// Build the code block element.
    pub fn view(self) -> Element<'a, M> {
        let mut actions = row![].spacing(SPACING_XS).align_y(Alignment::Center);

        if let Some(on_run) = self.on_run {
            actions = actions.push(
                button(
                    row![lucide::play().size(12), text("Run").size(12)]
                        .spacing(SPACING_XS)
                        .align_y(Alignment::Center),
                )
                .on_press(on_run)
                .padding([4.0, 10.0])
                .style(button_primary),
            );
        }

        let copy_label: Element<'a, M> = if self.copied {
            row![lucide::check().size(12), text("Copied").size(12)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center)
                .into()
        } else {
            row![lucide::copy().size(12), text("Copy").size(12)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center)
                .into()
        };
        actions = actions.push(
            button(copy_label)
                .on_press(self.on_copy)
                .padding([4.0, 10.0])
                .style(button_secondary),
        );

        let mut header = row![].align_y(Alignment::Center);
        if let Some(title) = &self.sample.title {
            header = header.push(text(title).size(12).style(|theme: &Theme| {
                iced::widget::text::Style {
                    color: Some(theme.extended_palette().secondary.base.color),
                }
            }));
        }
        header = header.push(Space::new().width(Length::Fill));
        header = header.push(actions);

        let listing = text(&self.sample.source).font(Font::MONOSPACE).size(13);

        let mut body = column![header, listing].spacing(SPACING_SM);

        if let Some(evaluation) = self.evaluation {
            body = body.push(rule::horizontal(1));
            body = body.push(view_evaluation(evaluation));
        }

        container(body)
            .padding(SPACING_SM + SPACING_XS)
            .width(Length::Fill)
            .style(code_container)
            .into()
    }
}

/// Sandbox outcome: the transcript for a successful run, a contained
/// failure notice otherwise.
fn view_evaluation<'a, M: 'a>(evaluation: &'a Evaluation) -> Element<'a, M> {
    match evaluation {
        Evaluation::Rendered { output } => text(output)
            .font(Font::MONOSPACE)
            .size(12)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().success.base.color),
            })
            .into(),
        Evaluation::Failed { message } => row![
            lucide::triangle_alert().size(14).style(|theme: &Theme| {
                iced::widget::text::Style {
                    color: Some(theme.extended_palette().danger.base.color),
                }
            }),
            text(message).size(12).style(|theme: &Theme| {
                iced::widget::text::Style {
                    color: Some(theme.extended_palette().danger.base.color),
                }
            }),
        ]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center)
        .into(),
    }
}
