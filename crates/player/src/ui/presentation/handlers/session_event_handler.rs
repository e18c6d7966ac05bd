//! Session event handler.
//!
//! Applies events from the application layer's `SessionService` to the
//! presentation state. The session reducer does the actual state work; this
//! layer only schedules the deferred follow-ups it asks for.

use std::time::Duration;

use dioxus::prelude::*;

use crate::application::session::{FollowUp, GAME_OVER_DISPLAY_SECS};
use crate::ports::outbound::SessionEvent;
use crate::ui::presentation::state::GameState;

/// Process one session event and update presentation state.
pub fn handle_session_event(event: SessionEvent, game_state: &mut GameState) {
    let follow_up = game_state.session.write().apply_event(event);

    match follow_up {
        Some(FollowUp::GameOverReset { epoch }) => {
            // Leave the terminal message on screen, then return to the
            // story list. The epoch keeps a timer from a finished game
            // from resetting a newer one.
            let mut session = game_state.session;
            spawn(async move {
                tokio::time::sleep(Duration::from_secs(GAME_OVER_DISPLAY_SECS)).await;
                session.write().finish_game_over(epoch);
            });
        }
        None => {}
    }
}
