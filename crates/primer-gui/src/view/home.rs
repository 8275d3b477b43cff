//! Landing page: hero, search and filter, the recently-added strip, and
//! the catalog clustered by category.

use std::collections::HashSet;

use iced::widget::{Space, column, container, pick_list, row, scrollable, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use primer_content::{Route, TopicQuery, search};
use primer_model::TopicRecord;

use crate::component::{EmptyState, SearchFilterBar, TopicCard};
use crate::message::{HomeMessage, Message};
use crate::state::{AppState, HomeViewState};
use crate::theme::{
    CONTENT_MAX_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS, ThemeMode,
};

/// How many dated lessons the "Recently added" strip shows.
const RECENT_LIMIT: usize = 3;

/// Render the landing page.
pub fn view_home<'a>(state: &'a AppState, home: &'a HomeViewState) -> Element<'a, Message> {
    let registry = &state.registry;
    let results = search(registry, &home.query);
    let shown = results.len();

    let filter_bar = SearchFilterBar::new(&home.query.text, "Search topics", |value| {
        Message::Home(HomeMessage::SearchChanged(value))
    })
    .category(home.query.category, |filter| {
        Message::Home(HomeMessage::CategorySelected(filter))
    })
    .stats(format!("{shown} of {} topics", registry.len()))
    .view();

    let mut content = column![view_hero(state), filter_bar]
        .spacing(SPACING_LG)
        .width(Length::Fill);

    if home.query.is_active() {
        content = content.push(view_results(state, results, &home.query));
    } else {
        let recent = registry.recently_added(RECENT_LIMIT);
        if !recent.is_empty() {
            content = content.push(view_recent_strip(recent));
        }
        content = content.push(view_catalog(state));
    }

    content = content.push(Space::new().height(SPACING_XL));

    let centered = container(
        container(content)
            .max_width(CONTENT_MAX_WIDTH)
            .padding([SPACING_LG, SPACING_MD]),
    )
    .center_x(Length::Fill);

    scrollable(centered)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// App title, tagline, and the appearance picker.
fn view_hero(state: &AppState) -> Element<'_, Message> {
    let titles = column![
        text("State Primer").size(30),
        text("An interactive field guide to predictable state containers.")
            .size(14)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().secondary.base.color),
            }),
    ]
    .spacing(SPACING_XS);

    let appearance = row![
        theme_icon(state.theme_mode),
        pick_list(ThemeMode::ALL, Some(state.theme_mode), Message::ThemeSelected)
            .text_size(13)
            .padding([6.0, 10.0]),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    row![titles, Space::new().width(Length::Fill), appearance]
        .align_y(Alignment::Center)
        .into()
}

fn theme_icon(mode: ThemeMode) -> Element<'static, Message> {
    let icon = match mode {
        ThemeMode::Light => lucide::sun(),
        ThemeMode::Dark => lucide::moon(),
        ThemeMode::System => lucide::monitor(),
    };
    icon.size(14).into()
}

/// Newest dated lessons, shown above the catalog.
fn view_recent_strip(recent: Vec<&TopicRecord>) -> Element<'_, Message> {
    let mut cards = row![].spacing(SPACING_SM).width(Length::Fill);
    for topic in recent {
        cards = cards.push(
            TopicCard::new(topic, Message::Navigate(Route::for_topic(topic)))
                .recent(true)
                .view(),
        );
    }

    column![
        row![lucide::timer().size(14), text("Recently added").size(16)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
        cards,
    ]
    .spacing(SPACING_SM)
    .width(Length::Fill)
    .into()
}

/// The full catalog clustered by category. Child lessons surface through
/// their parent card's sub-topic count rather than as their own cards.
fn view_catalog(state: &AppState) -> Element<'_, Message> {
    let registry = &state.registry;
    let recent_ids: HashSet<&str> = registry
        .recently_added(RECENT_LIMIT)
        .into_iter()
        .map(|topic| topic.id.as_str())
        .collect();

    let mut clusters = column![].spacing(SPACING_LG).width(Length::Fill);

    for (category, members) in registry.grouped() {
        let mut cards = column![].spacing(SPACING_SM).width(Length::Fill);
        let mut card_count = 0;
        for topic in members {
            if topic.is_child() {
                continue;
            }
            let child_count = registry.children(&topic.id).map_or(0, |c| c.len());
            cards = cards.push(
                TopicCard::new(topic, Message::Navigate(Route::for_topic(topic)))
                    .children(child_count)
                    .recent(recent_ids.contains(topic.id.as_str()))
                    .view(),
            );
            card_count += 1;
        }
        // A category whose members are all children of some other cluster's
        // parent has nothing of its own to show.
        if card_count == 0 {
            continue;
        }

        let header = column![
            text(category.label()).size(16),
            text(category.blurb())
                .size(12)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().secondary.base.color),
                }),
        ]
        .spacing(2.0);

        clusters = clusters.push(column![header, cards].spacing(SPACING_SM));
    }

    clusters.into()
}

/// Flat result list for an active query, or the no-results screen.
fn view_results<'a>(
    state: &'a AppState,
    results: Vec<&'a TopicRecord>,
    query: &TopicQuery,
) -> Element<'a, Message> {
    if results.is_empty() {
        let hint = if query.text.trim().is_empty() {
            "No topics in this category yet.".to_string()
        } else {
            format!("Nothing matches \"{}\".", query.text.trim())
        };
        return EmptyState::new(lucide::search_x().size(32), "No topics found")
            .description(hint)
            .action("Clear filters", Message::Home(HomeMessage::FiltersCleared))
            .view();
    }

    let mut cards = column![].spacing(SPACING_SM).width(Length::Fill);
    for topic in results {
        let child_count = state.registry.children(&topic.id).map_or(0, |c| c.len());
        cards = cards.push(
            TopicCard::new(topic, Message::Navigate(Route::for_topic(topic)))
                .children(child_count)
                .view(),
        );
    }
    cards.into()
}
