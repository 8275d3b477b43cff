//! Route-driven navigation.
//!
//! Navigation replaces the whole [`ViewState`]: entering a lesson builds a
//! fresh `TopicViewState`, and leaving one drops its quiz picks, sandbox
//! output, panel expansion and scroll position with it. The back stack
//! records the route being left, and the route a successful navigation
//! lands on is remembered for next launch.

use iced::Task;

use primer_content::{Resolution, Route, resolve};

use crate::message::Message;
use crate::state::{AppState, ViewState};

/// Resolve `route` against the catalog and build the view it lands on.
///
/// Unknown ids, child ids at top level, and mismatched parent/child pairs
/// all land on the not-found view; nothing here returns an error.
pub fn view_for(state: &AppState, route: &Route) -> ViewState {
    let path = route.path();
    match resolve(&state.registry, &path) {
        Ok(Resolution::Home) => ViewState::home(),
        Ok(resolution) => match resolution.topic() {
            Some(topic) => ViewState::topic(topic, route.clone()),
            None => ViewState::home(),
        },
        Err(_) => ViewState::NotFound { path },
    }
}

/// Navigate to a route, pushing the route being left onto the back stack.
///
/// Navigating to the route already shown resets the view in place without
/// stacking a duplicate history entry. Routes that fail to resolve are not
/// remembered, so a dead end never becomes the restored landing view.
pub fn navigate(state: &mut AppState, route: &Route) -> Task<Message> {
    let current = state.view.route();
    state.view = view_for(state, route);

    if current != *route {
        state.history.push(current);
    }
    if !matches!(state.view, ViewState::NotFound { .. }) {
        state.remember_route(route);
    }
    Task::none()
}

/// Pop the back stack and rebuild the view it names. A no-op when the
/// stack is empty.
pub fn go_back(state: &mut AppState) -> Task<Message> {
    let Some(route) = state.history.pop() else {
        return Task::none();
    };
    state.view = view_for(state, &route);
    if !matches!(state.view, ViewState::NotFound { .. }) {
        state.remember_route(&route);
    }
    Task::none()
}
