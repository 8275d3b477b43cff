//! Lesson page message handler.
//!
//! Covers the reading position, the section menu and all-topics drawer,
//! and the interactive blocks: quizzes, disclosure panels, and code
//! snippets with their sandbox runs and clipboard copies.

use std::time::Duration;

use iced::Task;
use iced::widget::operation;
use iced::widget::scrollable::{self, AbsoluteOffset};

use primer_content::TopicRegistry;
use primer_model::{CodeSample, ContentBlock, Verdict};
use primer_sandbox::Scope;

use super::MessageHandler;
use crate::message::{Message, TopicMessage};
use crate::state::{AppState, ViewState, scroll_progress};
use crate::view::lesson_scroll_id;

/// How long the "Copied" confirmation badge stays up.
const COPY_BADGE_DURATION: Duration = Duration::from_secs(2);

/// Handler for lesson page messages.
pub struct TopicHandler;

impl MessageHandler<TopicMessage> for TopicHandler {
    fn handle(&self, state: &mut AppState, msg: TopicMessage) -> Task<Message> {
        match msg {
            TopicMessage::Scrolled(viewport) => handle_scrolled(state, &viewport),

            TopicMessage::SectionClicked(section_id) => handle_section_clicked(state, &section_id),

            TopicMessage::MenuToggled => {
                if let ViewState::Topic(lesson) = &mut state.view {
                    lesson.menu_open = !lesson.menu_open;
                }
                Task::none()
            }

            TopicMessage::MenuCollapseToggled => {
                if let ViewState::Topic(lesson) = &mut state.view {
                    lesson.menu_collapsed = !lesson.menu_collapsed;
                }
                Task::none()
            }

            TopicMessage::PanelToggled(section, block) => {
                if let ViewState::Topic(lesson) = &mut state.view {
                    lesson.toggle_panel(section, block);
                }
                Task::none()
            }

            TopicMessage::QuizAnswered { quiz_id, choice } => {
                handle_quiz_answered(state, &quiz_id, choice)
            }

            TopicMessage::QuizRetried(quiz_id) => {
                if let ViewState::Topic(lesson) = &mut state.view
                    && let Some(attempt) = lesson.quizzes.get_mut(&quiz_id)
                {
                    attempt.reset();
                }
                Task::none()
            }

            TopicMessage::RunSnippet(section, block) => handle_run_snippet(state, (section, block)),

            TopicMessage::CopySnippet(section, block) => {
                handle_copy_snippet(state, (section, block))
            }

            TopicMessage::CopyBadgeExpired(epoch) => handle_copy_badge_expired(state, epoch),
        }
    }
}

// =============================================================================
// READING POSITION
// =============================================================================

/// Fold a scroll event into the reading position: raw offset, progress
/// percent, and the section highlighted in the menu.
fn handle_scrolled(state: &mut AppState, viewport: &scrollable::Viewport) -> Task<Message> {
    let ViewState::Topic(lesson) = &mut state.view else {
        return Task::none();
    };

    lesson.scroll_offset = viewport.absolute_offset().y;
    lesson.viewport_height = viewport.bounds().height;
    lesson.content_height = viewport.content_bounds().height;
    lesson.progress_percent = scroll_progress(
        lesson.scroll_offset,
        lesson.content_height,
        lesson.viewport_height,
    );
    lesson.active_section = lesson
        .anchors
        .active_at(lesson.scroll_offset, lesson.content_height)
        .map(String::from);
    Task::none()
}

/// Jump the lesson scrollable to a section anchor.
fn handle_section_clicked(state: &mut AppState, section_id: &str) -> Task<Message> {
    let ViewState::Topic(lesson) = &mut state.view else {
        return Task::none();
    };

    let Some(offset) = lesson.anchors.target_offset(section_id, lesson.content_height) else {
        return Task::none();
    };

    // Highlight right away; the scroll event converges on the same answer.
    lesson.active_section = Some(section_id.to_string());
    operation::scroll_to(lesson_scroll_id(), AbsoluteOffset { x: 0.0, y: offset })
}

// =============================================================================
// QUIZZES
// =============================================================================

/// Record a quiz answer. The first correct answer marks the quiz completed
/// in the persisted slice; re-answering after a retry never unmarks it.
fn handle_quiz_answered(state: &mut AppState, quiz_id: &str, choice: usize) -> Task<Message> {
    let ViewState::Topic(lesson) = &mut state.view else {
        return Task::none();
    };
    let Ok(topic) = state.registry.get(&lesson.topic_id) else {
        return Task::none();
    };
    let Some(quiz) = topic.quizzes().find(|quiz| quiz.id == quiz_id) else {
        return Task::none();
    };
    let Some(attempt) = lesson.quizzes.get_mut(quiz_id) else {
        return Task::none();
    };

    attempt.answer(choice, quiz.correct_index);

    if attempt.verdict() == Some(Verdict::Correct) && state.persisted.mark_quiz_completed(quiz_id) {
        state.persist_slice();
    }
    Task::none()
}

// =============================================================================
// CODE SNIPPETS
// =============================================================================

/// Run a snippet through the sandbox and store its evaluation inline.
fn handle_run_snippet(state: &mut AppState, key: (usize, usize)) -> Task<Message> {
    let ViewState::Topic(lesson) = &mut state.view else {
        return Task::none();
    };
    let Some(sample) = sample_at(&state.registry, &lesson.topic_id, key) else {
        return Task::none();
    };
    if !sample.runnable {
        return Task::none();
    }

    let evaluation = state
        .sandbox
        .evaluate(&sample.source, &Scope::closed(&sample.scope));
    lesson.evaluations.insert(key, evaluation);
    Task::none()
}

/// Copy a snippet's source and arm the confirmation badge timer.
///
/// The epoch payload lets a stale timer from an earlier copy expire without
/// clearing a badge that was re-armed since.
fn handle_copy_snippet(state: &mut AppState, key: (usize, usize)) -> Task<Message> {
    let ViewState::Topic(lesson) = &mut state.view else {
        return Task::none();
    };
    let Some(sample) = sample_at(&state.registry, &lesson.topic_id, key) else {
        return Task::none();
    };
    let source = sample.source.clone();

    lesson.copied_snippet = Some(key);
    state.copy_epoch += 1;
    let epoch = state.copy_epoch;

    Task::batch([
        iced::clipboard::write(source),
        Task::perform(tokio::time::sleep(COPY_BADGE_DURATION), move |()| {
            Message::Topic(TopicMessage::CopyBadgeExpired(epoch))
        }),
    ])
}

fn handle_copy_badge_expired(state: &mut AppState, epoch: u64) -> Task<Message> {
    if epoch != state.copy_epoch {
        return Task::none();
    }
    if let ViewState::Topic(lesson) = &mut state.view {
        lesson.copied_snippet = None;
    }
    Task::none()
}

/// The code sample at a `(section, block)` position, if that block is code.
fn sample_at<'a>(
    registry: &'a TopicRegistry,
    topic_id: &str,
    key: (usize, usize),
) -> Option<&'a CodeSample> {
    let topic = registry.get(topic_id).ok()?;
    match topic
        .sections
        .get(key.0)
        .and_then(|section| section.blocks.get(key.1))
    {
        Some(ContentBlock::Code(sample)) => Some(sample),
        _ => None,
    }
}
