//! Search and category filtering over the registry, for the landing page
//! grid and the CLI `search` command.

use std::fmt;

use primer_model::{Category, TopicRecord};

use crate::registry::TopicRegistry;

/// Category restriction: everything, or one category exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// All filter choices in pick-list order.
    pub const ALL: [CategoryFilter; 7] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Core),
        CategoryFilter::Only(Category::Middleware),
        CategoryFilter::Only(Category::Advanced),
        CategoryFilter::Only(Category::Implementation),
        CategoryFilter::Only(Category::Normalization),
        CategoryFilter::Only(Category::Selectors),
    ];

    /// Whether a record's category passes this filter. Uncategorized records
    /// pass only the unrestricted filter.
    pub fn admits(&self, category: Option<Category>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(*wanted),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All categories"),
            CategoryFilter::Only(category) => write!(f, "{}", category.label()),
        }
    }
}

/// A live search query: free text plus a category restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicQuery {
    pub text: String,
    pub category: CategoryFilter,
}

impl TopicQuery {
    /// True once the user has narrowed anything. Distinguishes "no results
    /// for this query" from "not searched yet" in the empty state.
    pub fn is_active(&self) -> bool {
        !self.text.trim().is_empty() || self.category != CategoryFilter::All
    }

    /// Case-insensitive substring match on title and description, ANDed with
    /// the category restriction.
    pub fn matches(&self, topic: &TopicRecord) -> bool {
        if !self.category.admits(topic.category) {
            return false;
        }
        let needle = self.text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        topic.title.to_lowercase().contains(&needle)
            || topic.description.to_lowercase().contains(&needle)
    }
}

/// Filter the registry, preserving registry order.
///
/// An empty query with no category restriction returns every record.
/// Identical arguments against the immutable registry always yield the same
/// ordered result.
pub fn search<'a>(registry: &'a TopicRegistry, query: &TopicQuery) -> Vec<&'a TopicRecord> {
    registry
        .get_all()
        .iter()
        .filter(|topic| query.matches(topic))
        .collect()
}
