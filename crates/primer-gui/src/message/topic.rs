//! Lesson page messages.

use iced::widget::scrollable;

/// Messages for the lesson page.
#[derive(Debug, Clone)]
pub enum TopicMessage {
    // =========================================================================
    // Reading position
    // =========================================================================
    /// The lesson scrollable reported a new viewport
    Scrolled(scrollable::Viewport),

    /// A section menu entry was clicked
    SectionClicked(String),

    // =========================================================================
    // Navigation chrome
    // =========================================================================
    /// Toggle the all-topics drawer
    MenuToggled,

    /// Collapse or restore the section menu rail
    MenuCollapseToggled,

    // =========================================================================
    // Interactive blocks
    // =========================================================================
    /// Expand or collapse a disclosure panel, keyed by (section, block)
    PanelToggled(usize, usize),

    /// An answer option was picked for a quiz
    QuizAnswered { quiz_id: String, choice: usize },

    /// "Try again" clicked on a revealed quiz
    QuizRetried(String),

    /// Run a code snippet in the sandbox, keyed by (section, block)
    RunSnippet(usize, usize),

    /// Copy a snippet's source to the clipboard, keyed by (section, block)
    CopySnippet(usize, usize),

    /// The copy confirmation badge timed out; the payload is the epoch the
    /// timer was armed with, so badges re-armed since then stay up
    CopyBadgeExpired(u64),
}
