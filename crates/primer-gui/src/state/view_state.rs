//! View state - current view and associated UI state.
//!
//! Each view variant holds its own UI state, and navigation replaces the
//! entire `ViewState`. Quiz selections, expanded panels, sandbox output,
//! and scroll position are all scoped to the lesson they belong to, so
//! leaving a lesson discards them without any explicit cleanup.

use std::collections::{BTreeMap, HashMap, HashSet};

use iced::widget::markdown;

use primer_content::Route;
use primer_model::{ContentBlock, QuizAttempt, TopicRecord};
use primer_sandbox::Evaluation;

use super::scroll::SectionAnchors;

// =============================================================================
// VIEW STATE
// =============================================================================

/// Current view and its associated UI state.
#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum ViewState {
    /// Landing page - grouped topic catalog with search and filter.
    Home(HomeViewState),

    /// A lesson page.
    Topic(TopicViewState),

    /// Unknown route - friendly dead end with a way back.
    NotFound {
        /// The path that failed to resolve.
        path: String,
    },
}

impl Default for ViewState {
    fn default() -> Self {
        Self::home()
    }
}

impl ViewState {
    /// Create home view state.
    pub fn home() -> Self {
        Self::Home(HomeViewState::default())
    }

    /// Create a lesson view state for a resolved topic.
    pub fn topic(topic: &TopicRecord, route: Route) -> Self {
        Self::Topic(TopicViewState::new(topic, route))
    }

    /// The route this view answers to, used for history and persistence.
    pub fn route(&self) -> Route {
        match self {
            Self::Home(_) => Route::Home,
            Self::Topic(lesson) => lesson.route.clone(),
            Self::NotFound { .. } => Route::Home,
        }
    }
}

// =============================================================================
// HOME VIEW STATE
// =============================================================================

/// UI state for the landing page.
#[derive(Debug, Clone, Default)]
pub struct HomeViewState {
    /// Live search text and category filter.
    pub query: primer_content::TopicQuery,
}

// =============================================================================
// TOPIC VIEW STATE
// =============================================================================

/// UI state for a lesson page.
///
/// Markdown prose is parsed once here rather than on every view pass;
/// blocks are keyed by `(section index, block index)`.
#[derive(Debug, Clone)]
pub struct TopicViewState {
    /// Canonical route of this lesson (includes the parent segment for
    /// child lessons).
    pub route: Route,
    /// Id of the topic being read.
    pub topic_id: String,
    /// Estimated section anchor positions for menu highlight and jumps.
    pub anchors: SectionAnchors,
    /// Pre-parsed markdown for prose blocks and panel bodies.
    pub markdown: BTreeMap<(usize, usize), Vec<markdown::Item>>,

    // Reading position, fed by the scrollable's scroll events.
    pub scroll_offset: f32,
    pub viewport_height: f32,
    pub content_height: f32,
    /// Percent of the scrollable distance covered, 0-100.
    pub progress_percent: f32,
    /// Section currently highlighted in the menu.
    pub active_section: Option<String>,

    // Navigation chrome.
    /// Whether the all-topics drawer is open.
    pub menu_open: bool,
    /// Whether the section menu is collapsed to a thin rail.
    pub menu_collapsed: bool,

    // Per-lesson interactive state, discarded on navigation.
    /// Disclosure panels currently expanded.
    pub expanded_panels: HashSet<(usize, usize)>,
    /// Quiz attempts keyed by quiz id.
    pub quizzes: HashMap<String, QuizAttempt>,
    /// Sandbox output keyed by `(section index, block index)`.
    pub evaluations: HashMap<(usize, usize), Evaluation>,
    /// Snippet currently showing the copy confirmation badge.
    pub copied_snippet: Option<(usize, usize)>,
}

impl TopicViewState {
    /// Build the view state for a lesson, parsing its markdown up front.
    pub fn new(topic: &TopicRecord, route: Route) -> Self {
        let mut parsed = BTreeMap::new();
        for (section_index, section) in topic.sections.iter().enumerate() {
            for (block_index, block) in section.blocks.iter().enumerate() {
                let text = match block {
                    ContentBlock::Prose(text) => text,
                    ContentBlock::Panel(panel) => &panel.body,
                    _ => continue,
                };
                parsed.insert(
                    (section_index, block_index),
                    markdown::parse(text).collect(),
                );
            }
        }

        let quizzes = topic
            .quizzes()
            .map(|quiz| (quiz.id.clone(), QuizAttempt::default()))
            .collect();

        Self {
            route,
            topic_id: topic.id.clone(),
            anchors: SectionAnchors::estimate(topic),
            markdown: parsed,
            scroll_offset: 0.0,
            viewport_height: 0.0,
            content_height: 0.0,
            progress_percent: 0.0,
            active_section: topic.sections.first().map(|s| s.id.clone()),
            menu_open: false,
            menu_collapsed: false,
            expanded_panels: HashSet::new(),
            quizzes,
            evaluations: HashMap::new(),
            copied_snippet: None,
        }
    }

    /// Parsed markdown for a block, if the block is prose or a panel body.
    pub fn markdown_for(&self, section_index: usize, block_index: usize) -> &[markdown::Item] {
        self.markdown
            .get(&(section_index, block_index))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_panel_expanded(&self, section_index: usize, block_index: usize) -> bool {
        self.expanded_panels.contains(&(section_index, block_index))
    }

    /// Flip one disclosure panel: expand if collapsed, collapse if expanded.
    pub fn toggle_panel(&mut self, section_index: usize, block_index: usize) {
        let key = (section_index, block_index);
        if !self.expanded_panels.remove(&key) {
            self.expanded_panels.insert(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use primer_model::{PanelSpec, Section};

    use super::*;

    fn lesson() -> TopicViewState {
        let topic = TopicRecord {
            id: "sample".to_string(),
            title: "Sample".to_string(),
            description: "d".to_string(),
            category: None,
            order: None,
            date: None,
            parent: None,
            sections: vec![Section {
                id: "one".to_string(),
                title: "One".to_string(),
                blocks: vec![
                    ContentBlock::Prose("Some *prose*.".to_string()),
                    ContentBlock::Panel(PanelSpec {
                        summary: "Why?".to_string(),
                        body: "Because the store owns the state.".to_string(),
                    }),
                ],
            }],
        };
        TopicViewState::new(
            &topic,
            Route::Topic {
                id: "sample".to_string(),
            },
        )
    }

    #[test]
    fn panels_start_collapsed_and_toggling_is_strictly_binary() {
        let mut lesson = lesson();
        assert!(!lesson.is_panel_expanded(0, 1));
        for round in 1..=5 {
            lesson.toggle_panel(0, 1);
            assert_eq!(lesson.is_panel_expanded(0, 1), round % 2 == 1);
        }
    }

    #[test]
    fn toggling_one_panel_leaves_others_alone() {
        let mut lesson = lesson();
        lesson.toggle_panel(0, 1);
        assert!(!lesson.is_panel_expanded(0, 0));
        assert!(lesson.is_panel_expanded(0, 1));
    }

    #[test]
    fn prose_and_panel_bodies_are_parsed_up_front() {
        let lesson = lesson();
        assert!(!lesson.markdown_for(0, 0).is_empty());
        assert!(!lesson.markdown_for(0, 1).is_empty());
        assert!(lesson.markdown_for(7, 7).is_empty());
    }
}
