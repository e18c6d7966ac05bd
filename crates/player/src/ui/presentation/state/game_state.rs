//! Game state management using Dioxus signals.
//!
//! All session data lives in one `Session` behind one signal; components
//! read through it and every mutation goes through the session's own
//! methods, never field-by-field from the UI.

use dioxus::prelude::*;

use crate::application::session::Session;

#[derive(Clone, Copy)]
pub struct GameState {
    pub session: Signal<Session>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::new()),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_game_state() -> GameState {
    use_context::<GameState>()
}
