//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the cross-page reactive signals into a single
//! struct provided via `use_context_provider`. Child components
//! retrieve it with `use_context::<AppState>()`. Page-local concerns
//! (slider positions, selected files, fetched series) stay in
//! page-local signals.

use crate::session::{resolve, Page, Role, Session};
use jn_api::station::StationSummary;
use dioxus::prelude::*;

/// Shared application state for all dashboard pages.
#[derive(Clone, Copy)]
pub struct AppState {
    /// In-memory role session; reset on reload
    pub session: Signal<Session>,
    /// Currently rendered page (requests go through [`AppState::navigate`])
    pub page: Signal<Page>,
    /// Station list for dropdowns
    pub stations: Signal<Vec<StationSummary>>,
    /// Currently selected station ID; empty means no selection
    pub selected_station: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::default()),
            page: Signal::new(Page::Login),
            stations: Signal::new(Vec::new()),
            selected_station: Signal::new(String::new()),
        }
    }

    /// Request a page; the session gate decides where we actually land.
    pub fn navigate(mut self, requested: Page) {
        let target = {
            let session = self.session.read();
            resolve(requested, &session)
        };
        self.page.set(target);
    }

    /// Mark the session authenticated and jump to the role's home page.
    pub fn login(mut self, role: Role) {
        self.session.set(Session::authenticated(role));
        self.page.set(role.home());
    }

    /// Drop the session; the gate sends everything back to login.
    pub fn logout(mut self) {
        self.session.set(Session::default());
        self.page.set(Page::Login);
        self.selected_station.set(String::new());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Monotonic generation counter guarding against stale responses.
///
/// Each effect-triggered request batch calls [`FetchGen::begin`] and
/// keeps the returned generation. When a response lands, the handler
/// stores it only if [`FetchGen::is_current`] still holds, so a late
/// response for a superseded filter state is discarded instead of
/// overwriting newer data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchGen(u64);

impl FetchGen {
    /// Start a new request batch, invalidating all previous ones.
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Whether `generation` is still the newest batch.
    pub fn is_current(&self, generation: u64) -> bool {
        self.0 == generation
    }
}

#[cfg(test)]
mod tests {
    use super::FetchGen;

    #[test]
    fn each_batch_gets_a_fresh_generation() {
        let mut gen = FetchGen::default();
        let first = gen.begin();
        let second = gen.begin();
        assert_ne!(first, second);
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut gen = FetchGen::default();
        let first = gen.begin();
        let second = gen.begin();
        // the older request resolves after the newer one was issued
        assert!(!gen.is_current(first));
        assert!(gen.is_current(second));
    }

    #[test]
    fn latest_batch_wins_regardless_of_completion_order() {
        let mut gen = FetchGen::default();
        let batches: Vec<u64> = (0..5).map(|_| gen.begin()).collect();
        for stale in &batches[..4] {
            assert!(!gen.is_current(*stale));
        }
        assert!(gen.is_current(batches[4]));
    }
}
