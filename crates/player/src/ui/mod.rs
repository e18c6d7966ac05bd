//! UI root: context wiring and the screen switch.

use dioxus::prelude::*;

use detetive_protocol::User;

use crate::application::session::Screen;
use crate::config::PlayerConfig;

pub mod presentation;

use presentation::components::{AuthModal, ChatView, Header, Intro, RankingModal, StorySelector};
use presentation::handlers::handle_session_event;
use presentation::state::{GameState, UiState};
use presentation::Services;

/// Root component. `PlayerConfig` is provided by `main` via LaunchBuilder.
pub fn app() -> Element {
    let config = use_context::<PlayerConfig>();

    // Built once on first render, inside the desktop tokio runtime; this is
    // where the WebSocket bridge task starts.
    let services = use_context_provider(|| Services::new(&config));
    let game_state = use_context_provider(GameState::new);
    let ui_state = use_context_provider(UiState::new);

    // Close the socket when the root unmounts (window close).
    let services_for_drop = services.clone();
    use_drop(move || services_for_drop.session.disconnect());

    // Apply session events to the reducer for the lifetime of the app.
    let services_for_events = services.clone();
    use_future(move || {
        let services = services_for_events.clone();
        let mut game_state = game_state;
        async move {
            let mut events = services.session.subscribe().await;
            while let Some(event) = events.recv().await {
                handle_session_event(event, &mut game_state);
            }
        }
    });

    // Startup fetches: story catalog, then any persisted login session.
    let services_for_boot = services.clone();
    use_future(move || {
        let api = services_for_boot.api.clone();
        let mut game_state = game_state;
        let mut ui_state = ui_state;
        async move {
            match api.fetch_historias().await {
                Ok(historias) => game_state.session.write().set_catalog(historias),
                Err(e) => ui_state.catalog_error.set(Some(e.to_string())),
            }

            match api.user_status().await {
                Ok(status) if status.is_authenticated => {
                    if let (Some(id), Some(username)) = (status.user_id, status.username) {
                        game_state.session.write().set_user(User { id, username });
                    }
                }
                Ok(_) => {}
                Err(e) => tracing::debug!("No persisted session: {}", e),
            }
        }
    });

    let screen = game_state.session.read().screen;
    let auth_open = *ui_state.auth_open.read();
    let ranking_open = ui_state.ranking_open.read().clone();

    rsx! {
        div {
            class: "app-shell",

            Header {}

            main {
                class: "app-main",

                match screen {
                    Screen::Intro => rsx! { Intro {} },
                    Screen::Selection => rsx! { StorySelector {} },
                    Screen::Playing => rsx! { ChatView {} },
                }
            }

            if auth_open {
                AuthModal {}
            }

            if let Some(historia_id) = ranking_open {
                RankingModal { historia_id }
            }
        }
    }
}
