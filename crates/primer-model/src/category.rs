use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grouping tag for catalog topics.
///
/// The set is fixed: grouping, filtering, and the landing page's section
/// order all iterate [`Category::ALL`]. A topic authored with a tag outside
/// this set still loads, but carries no category and is left out of grouped
/// listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Stores, actions, reducers, one-way data flow.
    Core,
    /// Extending dispatch: logging, async, custom middleware.
    Middleware,
    /// Composition, undo history, and other advanced patterns.
    Advanced,
    /// Building a store from scratch.
    Implementation,
    /// Keeping relational state flat and normalized.
    Normalization,
    /// Deriving and memoizing computed state.
    Selectors,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::Core,
        Category::Middleware,
        Category::Advanced,
        Category::Implementation,
        Category::Normalization,
        Category::Selectors,
    ];

    /// The canonical slug used in routes, authored content, and filters.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::Middleware => "middleware",
            Category::Advanced => "advanced",
            Category::Implementation => "implementation",
            Category::Normalization => "normalization",
            Category::Selectors => "selectors",
        }
    }

    /// Human-readable heading for grouped listings.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Core => "Core Concepts",
            Category::Middleware => "Middleware",
            Category::Advanced => "Advanced Patterns",
            Category::Implementation => "Under the Hood",
            Category::Normalization => "Normalizing State",
            Category::Selectors => "Selectors",
        }
    }

    /// One-line subtitle shown under the heading.
    pub fn blurb(&self) -> &'static str {
        match self {
            Category::Core => "The store, actions, reducers, and how data flows between them.",
            Category::Middleware => "Intercept dispatches to add logging, async work, and more.",
            Category::Advanced => "Patterns that build on the basics once they feel familiar.",
            Category::Implementation => "What a store actually does, by writing one yourself.",
            Category::Normalization => "Flat, id-keyed state for data that references other data.",
            Category::Selectors => "Computing derived data without recomputing the world.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parse a category slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "core" => Ok(Category::Core),
            "middleware" => Ok(Category::Middleware),
            "advanced" => Ok(Category::Advanced),
            "implementation" => Ok(Category::Implementation),
            "normalization" => Ok(Category::Normalization),
            "selectors" => Ok(Category::Selectors),
            other => Err(format!("unknown category `{other}`")),
        }
    }
}
