//! Handler-level tests for the main user flows: navigation with history,
//! quiz completion, snippet runs, and the persisted slice.
//!
//! These drive the message handlers directly against an [`AppState`] built
//! on a session-only store, which covers everything below the widget tree.

use primer_content::Route;
use primer_gui::handler::{HomeHandler, MessageHandler, TopicHandler, go_back, navigate};
use primer_gui::message::{HomeMessage, TopicMessage};
use primer_gui::state::{AppState, ViewState};
use primer_model::Verdict;
use primer_persistence::{KeyValueStore, MemoryStore, PersistedState, STATE_KEY, THEME_KEY};

fn fresh_state() -> AppState {
    AppState::with_store(Box::new(MemoryStore::new()))
}

fn topic_route(id: &str) -> Route {
    Route::Topic { id: id.to_string() }
}

fn open_lesson(state: &mut AppState, id: &str) {
    let _ = navigate(state, &topic_route(id));
    assert!(
        matches!(&state.view, ViewState::Topic(lesson) if lesson.topic_id == id),
        "expected the {id} lesson to be open"
    );
}

// The `store` lesson is the fixture for block-level tests. Its layout:
// section 0 has a quiz at block 1, section 1 has a runnable snippet at
// block 1 and a panel at block 2.
const QUIZ_ID: &str = "store-api";
const QUIZ_CORRECT: usize = 1;
const SNIPPET: (usize, usize) = (1, 1);
const PANEL: (usize, usize) = (1, 2);

#[test]
fn the_catalog_loads_and_the_app_starts_on_home() {
    let state = fresh_state();
    assert!(state.startup_error.is_none());
    assert!(!state.registry.is_empty());
    assert!(matches!(state.view, ViewState::Home(_)));
    assert!(state.history.is_empty());
}

#[test]
fn navigating_pushes_history_and_remembers_the_route() {
    let mut state = fresh_state();

    open_lesson(&mut state, "store");
    assert_eq!(state.history, vec![Route::Home]);
    assert_eq!(state.persisted.last_route.as_deref(), Some("/concepts/store"));

    // The remembered route reaches the store, not just the live slice.
    let written = PersistedState::load(state.store.as_ref());
    assert_eq!(written.last_route.as_deref(), Some("/concepts/store"));
}

#[test]
fn going_back_pops_history_and_is_a_noop_when_empty() {
    let mut state = fresh_state();

    open_lesson(&mut state, "store");
    open_lesson(&mut state, "reducers");
    assert_eq!(state.history.len(), 2);

    let _ = go_back(&mut state);
    assert!(matches!(&state.view, ViewState::Topic(lesson) if lesson.topic_id == "store"));

    let _ = go_back(&mut state);
    assert!(matches!(state.view, ViewState::Home(_)));
    assert!(state.history.is_empty());

    // Nothing left to return to: the view must not change.
    let _ = go_back(&mut state);
    assert!(matches!(state.view, ViewState::Home(_)));
}

#[test]
fn child_lessons_resolve_under_their_parent_path() {
    let mut state = fresh_state();

    let route = Route::Child {
        parent: "middleware".to_string(),
        id: "async-middleware".to_string(),
    };
    let _ = navigate(&mut state, &route);

    match &state.view {
        ViewState::Topic(lesson) => {
            assert_eq!(lesson.topic_id, "async-middleware");
            assert_eq!(lesson.route, route);
        }
        other => panic!("expected a lesson view, got {other:?}"),
    }
    assert_eq!(
        state.persisted.last_route.as_deref(),
        Some("/concepts/middleware/async-middleware")
    );
}

#[test]
fn unknown_routes_land_on_not_found_without_touching_last_route() {
    let mut state = fresh_state();
    open_lesson(&mut state, "store");

    let _ = navigate(&mut state, &topic_route("no-such-topic"));
    assert!(
        matches!(&state.view, ViewState::NotFound { path } if path == "/concepts/no-such-topic")
    );
    // The dead end is not worth restoring into on the next launch.
    assert_eq!(state.persisted.last_route.as_deref(), Some("/concepts/store"));
    // But it is in history, so Back still escapes it.
    let _ = go_back(&mut state);
    assert!(matches!(&state.view, ViewState::Topic(lesson) if lesson.topic_id == "store"));
}

#[test]
fn leaving_a_lesson_discards_its_ephemeral_state() {
    let mut state = fresh_state();
    open_lesson(&mut state, "store");

    let _ = TopicHandler.handle(
        &mut state,
        TopicMessage::QuizAnswered {
            quiz_id: QUIZ_ID.to_string(),
            choice: 0,
        },
    );
    let _ = TopicHandler.handle(&mut state, TopicMessage::PanelToggled(PANEL.0, PANEL.1));
    let _ = TopicHandler.handle(&mut state, TopicMessage::RunSnippet(SNIPPET.0, SNIPPET.1));

    let _ = navigate(&mut state, &Route::Home);
    open_lesson(&mut state, "store");

    let ViewState::Topic(lesson) = &state.view else {
        panic!("expected a lesson view");
    };
    assert_eq!(lesson.quizzes[QUIZ_ID].verdict(), None);
    assert!(!lesson.is_panel_expanded(PANEL.0, PANEL.1));
    assert!(lesson.evaluations.is_empty());
}

#[test]
fn a_correct_answer_records_completion_and_survives_a_restart() {
    let mut state = fresh_state();
    open_lesson(&mut state, "store");

    let _ = TopicHandler.handle(
        &mut state,
        TopicMessage::QuizAnswered {
            quiz_id: QUIZ_ID.to_string(),
            choice: QUIZ_CORRECT,
        },
    );

    let ViewState::Topic(lesson) = &state.view else {
        panic!("expected a lesson view");
    };
    assert_eq!(lesson.quizzes[QUIZ_ID].verdict(), Some(Verdict::Correct));
    assert!(state.is_quiz_completed(QUIZ_ID));

    // Restart: replay the persisted payload into a fresh store.
    let payload = state.store.get(STATE_KEY).expect("slice was written");
    let mut next_store = MemoryStore::new();
    next_store.set(STATE_KEY, &payload).expect("seed store");
    let next_session = AppState::with_store(Box::new(next_store));
    assert!(next_session.is_quiz_completed(QUIZ_ID));
    assert_eq!(
        next_session.persisted.last_route.as_deref(),
        Some("/concepts/store")
    );
}

#[test]
fn a_wrong_answer_reveals_but_does_not_record_completion() {
    let mut state = fresh_state();
    open_lesson(&mut state, "store");

    let _ = TopicHandler.handle(
        &mut state,
        TopicMessage::QuizAnswered {
            quiz_id: QUIZ_ID.to_string(),
            choice: 0,
        },
    );

    let ViewState::Topic(lesson) = &state.view else {
        panic!("expected a lesson view");
    };
    assert_eq!(lesson.quizzes[QUIZ_ID].verdict(), Some(Verdict::Incorrect));
    assert!(!state.is_quiz_completed(QUIZ_ID));
    let written = PersistedState::load(state.store.as_ref());
    assert!(written.completed_quizzes.is_empty());
}

#[test]
fn retrying_a_quiz_clears_the_attempt_but_not_the_completion() {
    let mut state = fresh_state();
    open_lesson(&mut state, "store");

    let _ = TopicHandler.handle(
        &mut state,
        TopicMessage::QuizAnswered {
            quiz_id: QUIZ_ID.to_string(),
            choice: QUIZ_CORRECT,
        },
    );
    let _ = TopicHandler.handle(&mut state, TopicMessage::QuizRetried(QUIZ_ID.to_string()));

    let ViewState::Topic(lesson) = &state.view else {
        panic!("expected a lesson view");
    };
    assert_eq!(lesson.quizzes[QUIZ_ID].verdict(), None);
    assert!(state.is_quiz_completed(QUIZ_ID));
}

#[test]
fn answering_again_after_completion_does_not_duplicate_the_record() {
    let mut state = fresh_state();
    open_lesson(&mut state, "store");

    for _ in 0..2 {
        let _ = TopicHandler.handle(
            &mut state,
            TopicMessage::QuizAnswered {
                quiz_id: QUIZ_ID.to_string(),
                choice: QUIZ_CORRECT,
            },
        );
        let _ = TopicHandler.handle(&mut state, TopicMessage::QuizRetried(QUIZ_ID.to_string()));
    }

    assert_eq!(
        state
            .persisted
            .completed_quizzes
            .iter()
            .filter(|id| *id == QUIZ_ID)
            .count(),
        1
    );
}

#[test]
fn running_a_snippet_stores_its_transcript_in_the_lesson() {
    let mut state = fresh_state();
    open_lesson(&mut state, "store");

    let _ = TopicHandler.handle(&mut state, TopicMessage::RunSnippet(SNIPPET.0, SNIPPET.1));

    let ViewState::Topic(lesson) = &state.view else {
        panic!("expected a lesson view");
    };
    let evaluation = lesson.evaluations.get(&SNIPPET).expect("snippet ran");
    assert!(!evaluation.is_failed(), "counter snippet should evaluate");
}

#[tokio::test]
async fn copy_badges_ignore_stale_expiry_ticks() {
    let mut state = fresh_state();
    open_lesson(&mut state, "store");

    let _ = TopicHandler.handle(&mut state, TopicMessage::CopySnippet(SNIPPET.0, SNIPPET.1));
    let first_epoch = state.copy_epoch;
    let _ = TopicHandler.handle(&mut state, TopicMessage::CopySnippet(SNIPPET.0, SNIPPET.1));
    assert!(state.copy_epoch > first_epoch);

    // The first timer firing late must not clear the re-armed badge.
    let _ = TopicHandler.handle(&mut state, TopicMessage::CopyBadgeExpired(first_epoch));
    let ViewState::Topic(lesson) = &state.view else {
        panic!("expected a lesson view");
    };
    assert_eq!(lesson.copied_snippet, Some(SNIPPET));

    let current_epoch = state.copy_epoch;
    let _ = TopicHandler.handle(&mut state, TopicMessage::CopyBadgeExpired(current_epoch));
    let ViewState::Topic(lesson) = &state.view else {
        panic!("expected a lesson view");
    };
    assert_eq!(lesson.copied_snippet, None);
}

#[test]
fn panel_toggles_are_scoped_to_one_block() {
    let mut state = fresh_state();
    open_lesson(&mut state, "store");

    let _ = TopicHandler.handle(&mut state, TopicMessage::PanelToggled(PANEL.0, PANEL.1));
    let ViewState::Topic(lesson) = &state.view else {
        panic!("expected a lesson view");
    };
    assert!(lesson.is_panel_expanded(PANEL.0, PANEL.1));
    assert!(!lesson.is_panel_expanded(0, 1));

    let _ = TopicHandler.handle(&mut state, TopicMessage::PanelToggled(PANEL.0, PANEL.1));
    let ViewState::Topic(lesson) = &state.view else {
        panic!("expected a lesson view");
    };
    assert!(!lesson.is_panel_expanded(PANEL.0, PANEL.1));
}

#[test]
fn section_clicks_move_the_highlight_immediately() {
    let mut state = fresh_state();
    open_lesson(&mut state, "store");

    let _ = TopicHandler.handle(
        &mut state,
        TopicMessage::SectionClicked("dispatch-loop".to_string()),
    );

    let ViewState::Topic(lesson) = &state.view else {
        panic!("expected a lesson view");
    };
    assert_eq!(lesson.active_section.as_deref(), Some("dispatch-loop"));
}

#[test]
fn search_text_and_category_narrow_the_query() {
    let mut state = fresh_state();

    let _ = HomeHandler.handle(&mut state, HomeMessage::SearchChanged("store".to_string()));
    let ViewState::Home(home) = &state.view else {
        panic!("expected the landing page");
    };
    assert!(home.query.is_active());
    let results = primer_content::search(&state.registry, &home.query);
    assert!(!results.is_empty());
    assert!(results.iter().all(|topic| {
        topic.title.to_lowercase().contains("store")
            || topic.description.to_lowercase().contains("store")
    }));

    let _ = HomeHandler.handle(&mut state, HomeMessage::FiltersCleared);
    let ViewState::Home(home) = &state.view else {
        panic!("expected the landing page");
    };
    assert!(!home.query.is_active());
}

#[test]
fn theme_choice_is_written_through_as_a_bare_slug() {
    let mut state = fresh_state();

    state.theme_mode = primer_gui::theme::ThemeMode::Dark;
    state.persist_theme();
    assert_eq!(state.store.get(THEME_KEY).as_deref(), Some("dark"));

    // A fresh session on the same payload starts dark.
    let mut next_store = MemoryStore::new();
    next_store.set(THEME_KEY, "dark").expect("seed store");
    let next_session = AppState::with_store(Box::new(next_store));
    assert_eq!(next_session.theme_mode, primer_gui::theme::ThemeMode::Dark);
}

#[test]
fn menu_toggles_flip_independently() {
    let mut state = fresh_state();
    open_lesson(&mut state, "store");

    let _ = TopicHandler.handle(&mut state, TopicMessage::MenuToggled);
    let _ = TopicHandler.handle(&mut state, TopicMessage::MenuCollapseToggled);
    let ViewState::Topic(lesson) = &state.view else {
        panic!("expected a lesson view");
    };
    assert!(lesson.menu_open);
    assert!(lesson.menu_collapsed);

    let _ = TopicHandler.handle(&mut state, TopicMessage::MenuToggled);
    let ViewState::Topic(lesson) = &state.view else {
        panic!("expected a lesson view");
    };
    assert!(!lesson.menu_open);
    assert!(lesson.menu_collapsed);
}
