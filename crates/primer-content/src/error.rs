//! Error types for catalog loading and lookup.

use thiserror::Error;

/// Errors produced while loading or querying the topic catalog.
///
/// Load-time variants point at authoring mistakes (they abort registry
/// construction); `TopicNotFound` and `RouteNotFound` are the two lookup
/// failures callers are expected to recover from by rendering a not-found
/// state.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    /// A topic document is not valid TOML or does not match the schema.
    #[error("failed to parse topic document {doc}: {source}")]
    Parse {
        doc: String,
        #[source]
        source: Box<toml::de::Error>,
    },

    /// Two topic documents share an id.
    #[error("duplicate topic id `{id}`")]
    DuplicateTopic { id: String },

    /// A topic names a parent that does not exist.
    #[error("topic `{topic}` references unknown parent `{parent}`")]
    UnknownParent { topic: String, parent: String },

    /// A topic nests under a topic that is itself a child.
    #[error("topic `{topic}` nests under `{parent}`, which is already a child topic")]
    NestedParent { topic: String, parent: String },

    /// Two sections of one topic share an anchor id.
    #[error("topic `{topic}` declares section `{section}` twice")]
    DuplicateSection { topic: String, section: String },

    /// Two quizzes share an id (ids are catalog-wide, they key completion marks).
    #[error("duplicate quiz id `{quiz}`")]
    DuplicateQuiz { quiz: String },

    /// A quiz answer index points outside its option list.
    #[error("quiz `{quiz}` marks option {correct_index} correct but has {options} options")]
    QuizIndexOutOfRange {
        quiz: String,
        correct_index: usize,
        options: usize,
    },

    /// A topic date is not an ISO `YYYY-MM-DD` value.
    #[error("topic `{topic}` has unparseable date `{value}`")]
    InvalidDate { topic: String, value: String },

    /// Lookup by id missed.
    #[error("topic `{id}` does not exist")]
    TopicNotFound { id: String },

    /// A navigation path matched no route.
    #[error("no route matches `{path}`")]
    RouteNotFound { path: String },
}

impl ContentError {
    /// True for the two lookup failures that views recover from locally,
    /// as opposed to load-time authoring errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ContentError::TopicNotFound { .. } | ContentError::RouteNotFound { .. }
        )
    }

    pub(crate) fn parse(doc: &str, source: toml::de::Error) -> Self {
        ContentError::Parse {
            doc: doc.to_string(),
            source: Box::new(source),
        }
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, ContentError>;
