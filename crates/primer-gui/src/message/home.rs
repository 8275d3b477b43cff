//! Landing page messages.

use primer_content::CategoryFilter;

/// Messages for the landing page.
#[derive(Debug, Clone)]
pub enum HomeMessage {
    /// Search text edited
    SearchChanged(String),

    /// Category filter picked
    CategorySelected(CategoryFilter),

    /// "Clear filters" clicked on the empty-result screen
    FiltersCleared,
}
