use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::quiz::QuizSpec;

/// One addressable unit of tutorial content.
///
/// Records are immutable after the catalog loads. `id` is the routing key;
/// `parent` links a child topic to its containing topic (two levels at most,
/// enforced at load). `category` is `None` when the authored tag is outside
/// the known set, which keeps the record reachable by id and route while
/// leaving it out of grouped listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    /// Sort key within a category; absent records sort last.
    pub order: Option<u32>,
    /// Marks recently added content for the landing page strip.
    pub date: Option<NaiveDate>,
    pub parent: Option<String>,
    pub sections: Vec<Section>,
}

impl TopicRecord {
    /// Ordering key: explicit `order` first, then id for a stable tiebreak.
    pub fn sort_key(&self) -> (u32, &str) {
        (self.order.unwrap_or(u32::MAX), &self.id)
    }

    pub fn is_child(&self) -> bool {
        self.parent.is_some()
    }

    /// A table of contents is only worth rendering with two or more sections.
    pub fn has_toc(&self) -> bool {
        self.sections.len() >= 2
    }

    /// All runnable code samples in authored order, with a stable per-topic
    /// index used by the CLI `run` command.
    pub fn runnable_snippets(&self) -> impl Iterator<Item = (usize, &CodeSample)> {
        self.sections
            .iter()
            .flat_map(|section| section.blocks.iter())
            .filter_map(|block| match block {
                ContentBlock::Code(sample) if sample.runnable => Some(sample),
                _ => None,
            })
            .enumerate()
    }

    /// All quizzes in authored order.
    pub fn quizzes(&self) -> impl Iterator<Item = &QuizSpec> {
        self.sections
            .iter()
            .flat_map(|section| section.blocks.iter())
            .filter_map(|block| match block {
                ContentBlock::Quiz(quiz) => Some(quiz),
                _ => None,
            })
    }
}

/// A titled subsection of a topic, addressable as a scroll anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Anchor id, unique within the topic.
    pub id: String,
    pub title: String,
    pub blocks: Vec<ContentBlock>,
}

/// One block of section content, in authored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentBlock {
    /// Markdown prose.
    Prose(String),
    Code(CodeSample),
    Quiz(QuizSpec),
    Panel(PanelSpec),
}

/// A code listing, optionally runnable through the sandbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    pub title: Option<String>,
    pub source: String,
    /// When set, the view offers a Run button and `scope` names the bindings
    /// the snippet may reference.
    pub runnable: bool,
    pub scope: Vec<String>,
}

/// An expandable disclosure: summary line always visible, body markdown
/// shown only while expanded. Starts collapsed on every view entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub summary: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_topic() -> TopicRecord {
        TopicRecord {
            id: "reducers".to_string(),
            title: "Reducers".to_string(),
            description: "Pure functions that produce the next state.".to_string(),
            category: Some(Category::Core),
            order: Some(3),
            date: None,
            parent: None,
            sections: vec![
                Section {
                    id: "shape".to_string(),
                    title: "The reducer signature".to_string(),
                    blocks: vec![
                        ContentBlock::Prose("A reducer takes state and an action.".to_string()),
                        ContentBlock::Code(CodeSample {
                            title: None,
                            source: "let s = store(counter, 0)".to_string(),
                            runnable: true,
                            scope: vec!["counter".to_string()],
                        }),
                    ],
                },
                Section {
                    id: "purity".to_string(),
                    title: "Why purity matters".to_string(),
                    blocks: vec![ContentBlock::Code(CodeSample {
                        title: Some("Not runnable".to_string()),
                        source: "// display only".to_string(),
                        runnable: false,
                        scope: vec![],
                    })],
                },
            ],
        }
    }

    #[test]
    fn sort_key_places_unordered_records_last() {
        let mut topic = sample_topic();
        let keyed = topic.sort_key();
        assert_eq!(keyed, (3, "reducers"));

        topic.order = None;
        assert_eq!(topic.sort_key(), (u32::MAX, "reducers"));
    }

    #[test]
    fn runnable_snippets_skips_display_only_samples() {
        let topic = sample_topic();
        let runnable: Vec<_> = topic.runnable_snippets().collect();
        assert_eq!(runnable.len(), 1);
        assert_eq!(runnable[0].0, 0);
        assert!(runnable[0].1.runnable);
    }

    #[test]
    fn toc_requires_at_least_two_sections() {
        let mut topic = sample_topic();
        assert!(topic.has_toc());
        topic.sections.truncate(1);
        assert!(!topic.has_toc());
    }
}
