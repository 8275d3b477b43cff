//! Inline multiple-choice quiz card.
//!
//! Options are plain buttons until the learner picks one. The first pick is
//! final and reveals everything at once: the correct option, the learner's
//! own pick when it was wrong, a verdict line and the explanation. A Try
//! again button re-arms the question from scratch.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use primer_model::{QuizAttempt, QuizSpec, Verdict};

use crate::theme::{
    BORDER_RADIUS_SM, SPACING_SM, SPACING_XS, button_ghost, button_secondary, card_container,
};

/// A quiz prompt, its options, and the post-answer feedback block.
pub struct QuizCard<'a, M> {
    quiz: &'a QuizSpec,
    attempt: QuizAttempt,
    completed_before: bool,
    on_answer: Box<dyn Fn(usize) -> M + 'a>,
    on_retry: M,
}

impl<'a, M: Clone + 'a> QuizCard<'a, M> {
    pub fn new(
        quiz: &'a QuizSpec,
        attempt: QuizAttempt,
        on_answer: impl Fn(usize) -> M + 'a,
        on_retry: M,
    ) -> Self {
        Self {
            quiz,
            attempt,
            completed_before: false,
            on_answer: Box::new(on_answer),
            on_retry,
        }
    }

    /// Show the badge for a quiz completed in an earlier session.
    pub fn completed_before(mut self, completed: bool) -> Self {
        self.completed_before = completed;
        self
    }

    /// Build the quiz card element.
    pub fn view(self) -> Element<'a, M> {
        let mut header = row![
            lucide::circle_help().size(16).style(primary_text),
            text(&self.quiz.prompt).size(15),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);

        if self.completed_before {
            header = header.push(Space::new().width(Length::Fill));
            header = header.push(
                row![
                    lucide::circle_check().size(13).style(success_text),
                    text("Completed").size(12).style(success_text),
                ]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
            );
        }

        let mut options = column![].spacing(SPACING_XS);
        for (index, label) in self.quiz.options.iter().enumerate() {
            options = options.push(self.option_row(index, label));
        }

        let mut body = column![header, options].spacing(SPACING_SM);

        if let QuizAttempt::Answered { verdict, .. } = self.attempt {
            let verdict_line: Element<'a, M> = match verdict {
                Verdict::Correct => row![
                    lucide::circle_check().size(14).style(success_text),
                    text("Correct!").size(13).style(success_text),
                ]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center)
                .into(),
                Verdict::Incorrect => row![
                    lucide::circle_x().size(14).style(danger_text),
                    text("Not quite.").size(13).style(danger_text),
                ]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center)
                .into(),
            };

            body = body.push(verdict_line);
            body = body.push(text(&self.quiz.explanation).size(13).style(secondary_text));
            body = body.push(
                button(
                    row![lucide::rotate_ccw().size(12), text("Try again").size(12)]
                        .spacing(SPACING_XS)
                        .align_y(Alignment::Center),
                )
                .on_press(self.on_retry)
                .padding([4.0, 10.0])
                .style(button_ghost),
            );
        }

        container(body)
            .padding(SPACING_SM + SPACING_XS)
            .width(Length::Fill)
            .style(card_container)
            .into()
    }

    /// One option. Neutral and pressable before the answer, color-coded and
    /// inert after it.
    fn option_row(&self, index: usize, label: &'a str) -> Element<'a, M> {
        match self.attempt {
            QuizAttempt::Unanswered => button(text(label).size(13))
                .on_press((self.on_answer)(index))
                .padding([8.0, 12.0])
                .width(Length::Fill)
                .style(button_secondary)
                .into(),
            QuizAttempt::Answered { choice, .. } => {
                let correct = index == self.quiz.correct_index;
                let chosen = index == choice;

                let style: fn(&Theme, button::Status) -> button::Style = if correct {
                    option_correct
                } else if chosen {
                    option_incorrect
                } else {
                    option_dimmed
                };

                let mut line = row![text(label).size(13)]
                    .spacing(SPACING_XS)
                    .align_y(Alignment::Center);
                if correct {
                    line = line.push(Space::new().width(Length::Fill));
                    line = line.push(lucide::check().size(13).style(success_text));
                } else if chosen {
                    line = line.push(Space::new().width(Length::Fill));
                    line = line.push(lucide::x().size(13).style(danger_text));
                }

                button(line)
                    .padding([8.0, 12.0])
                    .width(Length::Fill)
                    .style(style)
                    .into()
            }
        }
    }
}

// =============================================================================
// REVEAL STYLES
// =============================================================================

fn option_correct(theme: &Theme, _status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    button::Style {
        background: Some(palette.success.weak.color.into()),
        text_color: palette.success.weak.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: palette.success.base.color,
        },
        ..Default::default()
    }
}

fn option_incorrect(theme: &Theme, _status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    button::Style {
        background: Some(palette.danger.weak.color.into()),
        text_color: palette.danger.weak.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: palette.danger.base.color,
        },
        ..Default::default()
    }
}

fn option_dimmed(theme: &Theme, _status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    button::Style {
        background: Some(palette.background.base.color.into()),
        text_color: palette.background.strong.color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: palette.background.weak.color,
        },
        ..Default::default()
    }
}

fn primary_text(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(theme.extended_palette().primary.base.color),
    }
}

fn secondary_text(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(theme.extended_palette().secondary.base.color),
    }
}

fn success_text(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(theme.extended_palette().success.base.color),
    }
}

fn danger_text(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(theme.extended_palette().danger.base.color),
    }
}
