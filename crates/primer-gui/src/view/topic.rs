//! Lesson page: breadcrumb bar, reading progress, section menu, and the
//! lesson content itself.
//!
//! The content column is one scrollable; the section menu and the
//! all-topics drawer sit beside it and never scroll with it. Scroll events
//! feed the progress strip and the active-section highlight through
//! [`TopicMessage::Scrolled`].

use iced::widget::{Id, Space, button, column, container, markdown, row, rule, scrollable, text};
use iced::{Alignment, Element, Length, Padding, Theme};
use iced_fonts::lucide;

use primer_content::{Route, TopicRegistry};
use primer_model::{ContentBlock, Section, TopicRecord};

use crate::component::{CodeBlock, DisclosurePanel, QuizCard, TopicCard};
use crate::message::{Message, TopicMessage};
use crate::state::{AppState, TopicViewState};
use crate::theme::{
    CONTENT_MAX_WIDTH, MENU_WIDTH, MENU_WIDTH_COLLAPSED, PROGRESS_BAR_HEIGHT, SPACING_LG,
    SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS, button_ghost, button_primary, menu_container,
    primer_theme, progress_fill, progress_track,
};

/// Id of the lesson scrollable, shared with the scroll-to-section task.
pub fn lesson_scroll_id() -> Id {
    Id::new("lesson-content")
}

/// Render a lesson page.
pub fn view_topic<'a>(state: &'a AppState, lesson: &'a TopicViewState) -> Element<'a, Message> {
    let Ok(topic) = state.registry.get(&lesson.topic_id) else {
        // Lesson views are only built from resolved routes, so a miss here
        // means the view outlived the catalog it was built against.
        return super::view_not_found(&lesson.route.path());
    };

    let mut body = row![].width(Length::Fill).height(Length::Fill);
    if lesson.menu_open {
        body = body.push(view_drawer(&state.registry, &topic.id));
    }
    if topic.has_toc() {
        body = body.push(view_section_menu(topic, lesson));
    }
    body = body.push(view_content(state, topic, lesson));

    column![
        view_top_bar(&state.registry, topic, lesson),
        view_progress_bar(lesson.progress_percent),
        body,
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

// =============================================================================
// CHROME
// =============================================================================

/// Back button, breadcrumb trail, and the all-topics drawer toggle.
fn view_top_bar<'a>(
    registry: &'a TopicRegistry,
    topic: &'a TopicRecord,
    lesson: &'a TopicViewState,
) -> Element<'a, Message> {
    let back = button(
        row![lucide::arrow_left().size(14), text("Back").size(13)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Back)
    .padding([SPACING_XS, SPACING_SM])
    .style(button_ghost);

    let home = button(lucide::house().size(14))
        .on_press(Message::Navigate(Route::Home))
        .padding([SPACING_XS, SPACING_SM])
        .style(button_ghost);

    let mut crumbs = row![home].spacing(SPACING_XS).align_y(Alignment::Center);

    if let Route::Child { parent, .. } = &lesson.route
        && let Ok(parent_topic) = registry.get(parent)
    {
        crumbs = crumbs.push(crumb_separator());
        crumbs = crumbs.push(
            button(text(&parent_topic.title).size(13))
                .on_press(Message::Navigate(Route::for_topic(parent_topic)))
                .padding([SPACING_XS, SPACING_SM])
                .style(button_ghost),
        );
    }

    crumbs = crumbs.push(crumb_separator());
    crumbs = crumbs.push(text(&topic.title).size(13));

    let drawer_toggle = button(lucide::menu().size(16))
        .on_press(Message::Topic(TopicMessage::MenuToggled))
        .padding(SPACING_XS)
        .style(button_ghost);

    row![back, crumbs, Space::new().width(Length::Fill), drawer_toggle]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center)
        .padding([SPACING_SM, SPACING_MD])
        .into()
}

fn crumb_separator() -> Element<'static, Message> {
    text("/")
        .size(13)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().secondary.base.color),
        })
        .into()
}

/// Thin reading-progress strip under the breadcrumb bar.
fn view_progress_bar(percent: f32) -> Element<'static, Message> {
    let filled = percent.clamp(0.0, 100.0);

    let fill_width = if filled > 0.0 {
        Length::FillPortion(filled.max(1.0) as u16)
    } else {
        Length::Fixed(0.0)
    };
    let rest_width = if filled < 100.0 {
        Length::FillPortion((100.0 - filled).max(1.0) as u16)
    } else {
        Length::Fixed(0.0)
    };

    let fill = container(Space::new())
        .width(fill_width)
        .height(PROGRESS_BAR_HEIGHT)
        .style(progress_fill);

    container(row![fill, Space::new().width(rest_width)].height(PROGRESS_BAR_HEIGHT))
        .width(Length::Fill)
        .height(PROGRESS_BAR_HEIGHT)
        .style(progress_track)
        .into()
}

// =============================================================================
// SIDE PANELS
// =============================================================================

/// All-topics drawer, toggled from the menu button. Children indent under
/// their parent.
fn view_drawer<'a>(registry: &'a TopicRegistry, current_id: &str) -> Element<'a, Message> {
    let mut entries = column![
        button(
            row![lucide::house().size(13), text("All topics").size(12)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
        )
        .on_press(Message::Navigate(Route::Home))
        .padding([SPACING_XS, SPACING_SM])
        .width(Length::Fill)
        .style(button_ghost),
    ]
    .spacing(SPACING_XS);

    for topic in registry.top_level() {
        entries = entries.push(drawer_entry(topic, 0, topic.id == current_id));
        if let Ok(children) = registry.children(&topic.id) {
            for child in children {
                entries = entries.push(drawer_entry(child, 1, child.id == current_id));
            }
        }
    }

    container(scrollable(entries.padding(SPACING_SM)).height(Length::Fill))
        .width(MENU_WIDTH)
        .height(Length::Fill)
        .style(menu_container)
        .into()
}

fn drawer_entry(topic: &TopicRecord, depth: usize, current: bool) -> Element<'_, Message> {
    let label = text(&topic.title).size(12).style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        iced::widget::text::Style {
            color: Some(if current {
                palette.primary.base.color
            } else {
                palette.background.base.text
            }),
        }
    });

    button(label)
        .on_press(Message::Navigate(Route::for_topic(topic)))
        .padding(Padding::new(SPACING_XS).left(SPACING_SM + depth as f32 * SPACING_MD))
        .width(Length::Fill)
        .style(button_ghost)
        .into()
}

/// Collapsible "On this page" menu beside the content. Only rendered when
/// the lesson has enough sections to warrant one.
fn view_section_menu<'a>(
    topic: &'a TopicRecord,
    lesson: &'a TopicViewState,
) -> Element<'a, Message> {
    if lesson.menu_collapsed {
        let expand = button(lucide::chevrons_right().size(14))
            .on_press(Message::Topic(TopicMessage::MenuCollapseToggled))
            .padding(SPACING_XS)
            .style(button_ghost);

        return container(expand)
            .width(MENU_WIDTH_COLLAPSED)
            .height(Length::Fill)
            .padding(SPACING_SM)
            .style(menu_container)
            .into();
    }

    let header = row![
        text("On this page")
            .size(12)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().secondary.base.color),
            }),
        Space::new().width(Length::Fill),
        button(lucide::chevrons_left().size(14))
            .on_press(Message::Topic(TopicMessage::MenuCollapseToggled))
            .padding(SPACING_XS)
            .style(button_ghost),
    ]
    .align_y(Alignment::Center);

    let mut entries = column![].spacing(2.0);
    for section in &topic.sections {
        let active = lesson.active_section.as_deref() == Some(section.id.as_str());
        entries = entries.push(section_entry(section, active));
    }

    container(
        column![
            header,
            Space::new().height(SPACING_SM),
            scrollable(entries).height(Length::Fill),
        ]
        .padding(SPACING_SM),
    )
    .width(MENU_WIDTH)
    .height(Length::Fill)
    .style(menu_container)
    .into()
}

fn section_entry(section: &Section, active: bool) -> Element<'_, Message> {
    let label = text(&section.title).size(13).style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        iced::widget::text::Style {
            color: Some(if active {
                palette.primary.base.color
            } else {
                palette.secondary.base.color
            }),
        }
    });

    button(label)
        .on_press(Message::Topic(TopicMessage::SectionClicked(
            section.id.clone(),
        )))
        .padding([SPACING_XS, SPACING_SM])
        .width(Length::Fill)
        .style(button_ghost)
        .into()
}

// =============================================================================
// CONTENT
// =============================================================================

/// The scrollable lesson body: title, sections, child lessons, next topic.
fn view_content<'a>(
    state: &'a AppState,
    topic: &'a TopicRecord,
    lesson: &'a TopicViewState,
) -> Element<'a, Message> {
    // markdown::view needs a concrete theme rather than a style closure.
    let theme = primer_theme(state.theme_mode, state.system_is_dark);

    let mut blocks = column![
        text(&topic.title).size(26),
        text(&topic.description)
            .size(14)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().secondary.base.color),
            }),
    ]
    .spacing(SPACING_MD)
    .width(Length::Fill);

    for (section_index, section) in topic.sections.iter().enumerate() {
        blocks = blocks.push(view_section(state, lesson, &theme, section_index, section));
    }

    if let Ok(children) = state.registry.children(&topic.id)
        && !children.is_empty()
    {
        blocks = blocks.push(view_children(children));
    }

    if let Some(next) = next_in_reading_order(&state.registry, topic) {
        blocks = blocks.push(view_next_button(next));
    }
    blocks = blocks.push(Space::new().height(SPACING_XL));

    let centered = container(
        container(blocks)
            .max_width(CONTENT_MAX_WIDTH)
            .padding([SPACING_LG, SPACING_MD]),
    )
    .center_x(Length::Fill);

    scrollable(centered)
        .id(lesson_scroll_id())
        .on_scroll(|viewport| Message::Topic(TopicMessage::Scrolled(viewport)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_section<'a>(
    state: &'a AppState,
    lesson: &'a TopicViewState,
    theme: &Theme,
    section_index: usize,
    section: &'a Section,
) -> Element<'a, Message> {
    let mut body = column![text(&section.title).size(20)]
        .spacing(SPACING_MD)
        .width(Length::Fill);

    for (block_index, block) in section.blocks.iter().enumerate() {
        body = body.push(view_block(
            state,
            lesson,
            theme,
            (section_index, block_index),
            block,
        ));
    }

    body.into()
}

fn view_block<'a>(
    state: &'a AppState,
    lesson: &'a TopicViewState,
    theme: &Theme,
    key: (usize, usize),
    block: &'a ContentBlock,
) -> Element<'a, Message> {
    let (section_index, block_index) = key;
    match block {
        ContentBlock::Prose(_) => markdown::view(
            lesson.markdown_for(section_index, block_index),
            theme.clone(),
        )
        .map(|url| Message::OpenUrl(url.to_string())),

        ContentBlock::Code(sample) => {
            let mut code = CodeBlock::new(
                sample,
                Message::Topic(TopicMessage::CopySnippet(section_index, block_index)),
            )
            .evaluation(lesson.evaluations.get(&key))
            .copied(lesson.copied_snippet == Some(key));
            if sample.runnable {
                code = code.runnable(Message::Topic(TopicMessage::RunSnippet(
                    section_index,
                    block_index,
                )));
            }
            code.view()
        }

        ContentBlock::Quiz(quiz) => {
            let attempt = lesson.quizzes.get(&quiz.id).copied().unwrap_or_default();
            QuizCard::new(
                quiz,
                attempt,
                move |choice| {
                    Message::Topic(TopicMessage::QuizAnswered {
                        quiz_id: quiz.id.clone(),
                        choice,
                    })
                },
                Message::Topic(TopicMessage::QuizRetried(quiz.id.clone())),
            )
            .completed_before(state.is_quiz_completed(&quiz.id))
            .view()
        }

        ContentBlock::Panel(panel) => {
            let mut disclosure = DisclosurePanel::new(
                panel,
                Message::Topic(TopicMessage::PanelToggled(section_index, block_index)),
            );
            if lesson.is_panel_expanded(section_index, block_index) {
                disclosure = disclosure.body(
                    markdown::view(
                        lesson.markdown_for(section_index, block_index),
                        theme.clone(),
                    )
                    .map(|url| Message::OpenUrl(url.to_string())),
                );
            }
            disclosure.view()
        }
    }
}

// =============================================================================
// ONWARD LINKS
// =============================================================================

/// "Continue with" cards linking to a parent lesson's children.
fn view_children(children: Vec<&TopicRecord>) -> Element<'_, Message> {
    let mut cards = column![].spacing(SPACING_SM).width(Length::Fill);
    for child in children {
        cards = cards
            .push(TopicCard::new(child, Message::Navigate(Route::for_topic(child))).view());
    }

    column![rule::horizontal(1), text("Continue with").size(16), cards]
        .spacing(SPACING_MD)
        .width(Length::Fill)
        .into()
}

/// Forward link to the next lesson in reading order.
fn view_next_button(next: &TopicRecord) -> Element<'_, Message> {
    let label = row![
        text(format!("Next: {}", next.title)).size(14),
        lucide::chevron_right().size(14),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    container(
        button(label)
            .on_press(Message::Navigate(Route::for_topic(next)))
            .padding([SPACING_SM, SPACING_LG])
            .style(button_primary),
    )
    .width(Length::Fill)
    .align_x(Alignment::End)
    .into()
}

/// The lesson that follows `topic` when reading front to back: down into a
/// parent's first child, across to the next sibling, then out to the next
/// top-level topic.
fn next_in_reading_order<'a>(
    registry: &'a TopicRegistry,
    topic: &TopicRecord,
) -> Option<&'a TopicRecord> {
    if !topic.is_child()
        && let Ok(children) = registry.children(&topic.id)
        && let Some(first) = children.first().copied()
    {
        return Some(first);
    }

    match &topic.parent {
        Some(parent_id) => {
            let siblings = registry.children(parent_id).ok()?;
            let position = siblings.iter().position(|t| t.id == topic.id)?;
            if let Some(next) = siblings.get(position + 1).copied() {
                return Some(next);
            }
            let parent = registry.get(parent_id).ok()?;
            next_top_level(registry, parent)
        }
        None => next_top_level(registry, topic),
    }
}

fn next_top_level<'a>(
    registry: &'a TopicRegistry,
    topic: &TopicRecord,
) -> Option<&'a TopicRecord> {
    let ordered = registry.top_level();
    let position = ordered.iter().position(|t| t.id == topic.id)?;
    ordered.get(position + 1).copied()
}
