//! Root application state.

use primer_content::{Route, TopicRegistry};
use primer_persistence::{KeyValueStore, PersistedState, THEME_KEY, open_with_fallback};
use primer_sandbox::SandboxAdapter;

use crate::component::ToastState;
use crate::error::GuiError;
use crate::theme::ThemeMode;

use super::view_state::ViewState;

/// All application state.
///
/// The lesson catalog and the preference store are loaded once at startup;
/// everything else changes through message handlers.
pub struct AppState {
    /// The validated lesson catalog. Empty when `startup_error` is set.
    pub registry: TopicRegistry,
    /// Set when the embedded catalog failed validation; the app shows a
    /// dedicated error screen instead of the lesson views.
    pub startup_error: Option<GuiError>,

    /// Preference store. Falls back to a session-only store when the
    /// platform offers no writable config directory.
    pub store: Box<dyn KeyValueStore + Send>,
    /// The whitelisted slice that survives restarts.
    pub persisted: PersistedState,

    /// Theme choice, persisted under [`THEME_KEY`].
    pub theme_mode: ThemeMode,
    /// Dark-mode preference reported by the operating system.
    pub system_is_dark: bool,

    /// Current view and its UI state.
    pub view: ViewState,
    /// Routes to return to, most recent last.
    pub history: Vec<Route>,
    /// Transient notification, if any.
    pub toast: Option<ToastState>,

    /// Sandbox used to run lesson snippets.
    pub sandbox: SandboxAdapter,
    /// Monotonic counter that invalidates stale copy-confirmation timers.
    pub copy_epoch: u64,
}

impl AppState {
    /// Load state at startup: open the preference store, read back the
    /// persisted slice, and validate the embedded catalog.
    pub fn load() -> Self {
        let (store, store_is_fallback) = open_with_fallback();
        let mut state = Self::with_store(store);
        if store_is_fallback {
            state.toast = Some(ToastState::warning(
                "Preferences can't be saved on this system; changes last until the app closes.",
            ));
        }
        state
    }

    /// Build state on top of an explicit store. Loading never fails: a bad
    /// catalog becomes `startup_error`, bad persisted data becomes defaults.
    pub fn with_store(store: Box<dyn KeyValueStore + Send>) -> Self {
        let (registry, startup_error) = match TopicRegistry::load() {
            Ok(registry) => (registry, None),
            Err(error) => {
                tracing::error!(%error, "embedded lesson catalog failed validation");
                (TopicRegistry::default(), Some(GuiError::catalog_load(error)))
            }
        };

        let theme_mode = store
            .get(THEME_KEY)
            .and_then(|slug| ThemeMode::from_slug(&slug))
            .unwrap_or_default();

        let persisted = PersistedState::load(store.as_ref());

        Self {
            registry,
            startup_error,
            store,
            persisted,
            theme_mode,
            system_is_dark: false,
            view: ViewState::default(),
            history: Vec::new(),
            toast: None,
            sandbox: SandboxAdapter::default(),
            copy_epoch: 0,
        }
    }

    /// Persist the theme choice. Failures downgrade to session-only.
    pub fn persist_theme(&mut self) {
        if let Err(error) = self.store.set(THEME_KEY, self.theme_mode.slug()) {
            tracing::warn!(%error, "theme preference not saved");
        }
    }

    /// Persist the application-state slice. Failures downgrade to
    /// session-only.
    pub fn persist_slice(&mut self) {
        if let Err(error) = self.persisted.store(&mut *self.store) {
            tracing::warn!(%error, "session state not saved");
        }
    }

    /// Record the route the user is on so the next launch can restore it.
    pub fn remember_route(&mut self, route: &Route) {
        self.persisted.last_route = Some(route.path());
        self.persist_slice();
    }

    pub fn is_quiz_completed(&self, quiz_id: &str) -> bool {
        self.persisted.is_quiz_completed(quiz_id)
    }
}
