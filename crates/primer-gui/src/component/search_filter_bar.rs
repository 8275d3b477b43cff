//! Search and filter bar component.
//!
//! A search input paired with a category pick list and an optional result
//! count, used at the top of the landing page catalog.

use iced::widget::{Space, column, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length, Theme};

use primer_content::CategoryFilter;

use crate::theme::{SPACING_SM, SPACING_XS};

/// Search input with a category pick list.
///
/// # Example
/// ```ignore
/// SearchFilterBar::new(&query.text, "Search topics...", |s| Message::SearchChanged(s))
///     .category(query.category, Message::CategorySelected)
///     .stats(format!("{shown} of {total} topics"))
///     .view()
/// ```
pub struct SearchFilterBar<M> {
    search_value: String,
    placeholder: String,
    on_search: Box<dyn Fn(String) -> M>,
    category: CategoryFilter,
    on_category: Option<Box<dyn Fn(CategoryFilter) -> M>>,
    stats_text: Option<String>,
}

impl<M: Clone + 'static> SearchFilterBar<M> {
    /// Create a new search filter bar.
    pub fn new(
        search_value: &str,
        placeholder: impl Into<String>,
        on_search: impl Fn(String) -> M + 'static,
    ) -> Self {
        Self {
            search_value: search_value.to_string(),
            placeholder: placeholder.into(),
            on_search: Box::new(on_search),
            category: CategoryFilter::All,
            on_category: None,
            stats_text: None,
        }
    }

    /// Add the category pick list.
    pub fn category(
        mut self,
        selected: CategoryFilter,
        on_select: impl Fn(CategoryFilter) -> M + 'static,
    ) -> Self {
        self.category = selected;
        self.on_category = Some(Box::new(on_select));
        self
    }

    /// Add a result count line below the inputs.
    pub fn stats(mut self, text: impl Into<String>) -> Self {
        self.stats_text = Some(text.into());
        self
    }

    /// Build the search filter bar element.
    pub fn view(self) -> Element<'static, M> {
        let search_input = text_input(&self.placeholder, &self.search_value)
            .on_input(self.on_search)
            .padding([8.0, 12.0])
            .size(14)
            .width(Length::Fill);

        let mut inputs = row![search_input].spacing(SPACING_SM).align_y(Alignment::Center);

        if let Some(on_category) = self.on_category {
            let picker = pick_list(CategoryFilter::ALL, Some(self.category), on_category)
                .text_size(13)
                .padding([8.0, 12.0]);
            inputs = inputs.push(picker);
        }

        let mut content = column![inputs].spacing(SPACING_XS);

        if let Some(stats) = self.stats_text {
            content = content.push(Space::new().height(SPACING_XS));
            content = content.push(text(stats).size(12).style(|theme: &Theme| {
                iced::widget::text::Style {
                    color: Some(theme.extended_palette().background.strong.color),
                }
            }));
        }

        content.into()
    }
}
