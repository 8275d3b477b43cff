//! The topic registry: validated, immutable catalog access.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use chrono::NaiveDate;
use primer_model::{Category, CodeSample, ContentBlock, PanelSpec, Section, TopicRecord};

use crate::embedded;
use crate::error::{ContentError, Result};
use crate::raw::{RawBlock, RawTopic};

/// Immutable catalog of every topic, indexed by id and by parent.
///
/// Built once at startup from the embedded documents and shared read-only
/// after that. Registry order is `(order, id)` across the whole catalog;
/// grouped and child listings reuse the same ordering. The `Default` value
/// is an empty catalog, used as a stand-in when loading fails and the
/// caller still needs something to render against.
#[derive(Debug, Default)]
pub struct TopicRegistry {
    topics: Vec<TopicRecord>,
    index: BTreeMap<String, usize>,
    children: BTreeMap<String, Vec<usize>>,
}

impl TopicRegistry {
    /// Load the embedded catalog.
    ///
    /// # Errors
    ///
    /// Returns the first authoring error found: malformed TOML, duplicate
    /// ids, broken parent links, nesting deeper than two levels, or quiz
    /// answer indexes out of range.
    pub fn load() -> Result<Self> {
        Self::from_documents(&embedded::documents())
    }

    /// Build a registry from `(name, toml)` document pairs.
    ///
    /// `load()` goes through here with the embedded set; tests feed synthetic
    /// documents to exercise validation.
    pub fn from_documents(documents: &[(&str, &str)]) -> Result<Self> {
        let mut topics = Vec::with_capacity(documents.len());
        for (name, text) in documents {
            let raw: RawTopic =
                toml::from_str(text).map_err(|source| ContentError::parse(name, source))?;
            topics.push(convert(raw)?);
        }

        topics.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        let mut index = BTreeMap::new();
        for (position, topic) in topics.iter().enumerate() {
            if index.insert(topic.id.clone(), position).is_some() {
                return Err(ContentError::DuplicateTopic {
                    id: topic.id.clone(),
                });
            }
        }

        let mut quiz_ids = BTreeSet::new();
        for topic in &topics {
            for quiz in topic.quizzes() {
                if !quiz_ids.insert(quiz.id.clone()) {
                    return Err(ContentError::DuplicateQuiz {
                        quiz: quiz.id.clone(),
                    });
                }
            }
        }

        let mut children: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (position, topic) in topics.iter().enumerate() {
            let Some(parent_id) = &topic.parent else {
                continue;
            };
            let Some(&parent_position) = index.get(parent_id) else {
                return Err(ContentError::UnknownParent {
                    topic: topic.id.clone(),
                    parent: parent_id.clone(),
                });
            };
            if topics[parent_position].is_child() {
                return Err(ContentError::NestedParent {
                    topic: topic.id.clone(),
                    parent: parent_id.clone(),
                });
            }
            children.entry(parent_id.clone()).or_default().push(position);
        }

        Ok(Self {
            topics,
            index,
            children,
        })
    }

    /// Every record in registry order.
    pub fn get_all(&self) -> &[TopicRecord] {
        &self.topics
    }

    /// Look up one record by id.
    ///
    /// # Errors
    ///
    /// `TopicNotFound` when the id is not in the catalog.
    pub fn get(&self, id: &str) -> Result<&TopicRecord> {
        self.index
            .get(id)
            .map(|&position| &self.topics[position])
            .ok_or_else(|| ContentError::TopicNotFound { id: id.to_string() })
    }

    /// Child records of a topic, in registry order. Empty for a childless
    /// topic that exists.
    ///
    /// # Errors
    ///
    /// `TopicNotFound` when the parent id itself is unknown.
    pub fn children(&self, parent_id: &str) -> Result<Vec<&TopicRecord>> {
        self.get(parent_id)?;
        Ok(self
            .children
            .get(parent_id)
            .map(|positions| positions.iter().map(|&p| &self.topics[p]).collect())
            .unwrap_or_default())
    }

    /// Records clustered by category, categories in display order, clusters
    /// in registry order. Uncategorized records are left out; empty clusters
    /// are not reported.
    pub fn grouped(&self) -> Vec<(Category, Vec<&TopicRecord>)> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                let members: Vec<&TopicRecord> = self
                    .topics
                    .iter()
                    .filter(|topic| topic.category == Some(category))
                    .collect();
                (!members.is_empty()).then_some((category, members))
            })
            .collect()
    }

    /// Records without a parent, in registry order.
    pub fn top_level(&self) -> Vec<&TopicRecord> {
        self.topics.iter().filter(|t| !t.is_child()).collect()
    }

    /// Up to `limit` dated records, newest first.
    pub fn recently_added(&self, limit: usize) -> Vec<&TopicRecord> {
        let mut dated: Vec<&TopicRecord> =
            self.topics.iter().filter(|t| t.date.is_some()).collect();
        dated.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        dated.truncate(limit);
        dated
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

/// Convert one parsed document into a validated record.
fn convert(raw: RawTopic) -> Result<TopicRecord> {
    let category = match raw.category.parse::<Category>() {
        Ok(category) => Some(category),
        Err(_) => {
            tracing::warn!(
                topic = %raw.id,
                category = %raw.category,
                "unknown category, topic will not appear in grouped listings"
            );
            None
        }
    };

    let date = raw
        .date
        .map(|value| {
            NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| ContentError::InvalidDate {
                topic: raw.id.clone(),
                value,
            })
        })
        .transpose()?;

    let mut section_ids = BTreeSet::new();
    let mut sections = Vec::with_capacity(raw.sections.len());
    for raw_section in raw.sections {
        if !section_ids.insert(raw_section.id.clone()) {
            return Err(ContentError::DuplicateSection {
                topic: raw.id.clone(),
                section: raw_section.id,
            });
        }
        let blocks = raw_section
            .blocks
            .into_iter()
            .map(convert_block)
            .collect::<Result<Vec<ContentBlock>>>()?;
        sections.push(Section {
            id: raw_section.id,
            title: raw_section.title,
            blocks,
        });
    }

    Ok(TopicRecord {
        id: raw.id,
        title: raw.title,
        description: raw.description,
        category,
        order: raw.order,
        date,
        parent: raw.parent,
        sections,
    })
}

fn convert_block(block: RawBlock) -> Result<ContentBlock> {
    Ok(match block {
        RawBlock::Prose { text } => ContentBlock::Prose(text),
        RawBlock::Code {
            title,
            source,
            runnable,
            scope,
        } => ContentBlock::Code(CodeSample {
            title,
            source,
            runnable,
            scope,
        }),
        RawBlock::Quiz {
            id,
            prompt,
            options,
            correct_index,
            explanation,
        } => {
            if correct_index >= options.len() {
                return Err(ContentError::QuizIndexOutOfRange {
                    quiz: id,
                    correct_index,
                    options: options.len(),
                });
            }
            ContentBlock::Quiz(primer_model::QuizSpec {
                id,
                prompt,
                options,
                correct_index,
                explanation,
            })
        }
        RawBlock::Panel { summary, body } => ContentBlock::Panel(PanelSpec { summary, body }),
    })
}
