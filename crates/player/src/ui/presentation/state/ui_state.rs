//! Chrome-level UI state: modals and transient errors.
//!
//! Kept apart from the session so opening a modal never touches game state.

use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct UiState {
    /// Auth modal visibility.
    pub auth_open: Signal<bool>,
    /// Last auth failure, shown inside the modal.
    pub auth_error: Signal<Option<String>>,
    /// Auth request in flight; submit buttons disable while set.
    pub auth_busy: Signal<bool>,
    /// Story id whose ranking modal is open, if any.
    pub ranking_open: Signal<Option<String>>,
    /// Catalog fetch failure, shown on the selection screen.
    pub catalog_error: Signal<Option<String>>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            auth_open: Signal::new(false),
            auth_error: Signal::new(None),
            auth_busy: Signal::new(false),
            ranking_open: Signal::new(None),
            catalog_error: Signal::new(None),
        }
    }

    pub fn open_auth(&mut self) {
        self.auth_error.set(None);
        self.auth_busy.set(false);
        self.auth_open.set(true);
    }

    pub fn close_auth(&mut self) {
        self.auth_open.set(false);
        self.auth_error.set(None);
        self.auth_busy.set(false);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_ui_state() -> UiState {
    use_context::<UiState>()
}
