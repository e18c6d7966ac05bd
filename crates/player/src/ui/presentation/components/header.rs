//! Top bar: title, connection indicator, and auth controls.

use dioxus::prelude::*;

use crate::ports::outbound::ConnectionStatus;
use crate::ui::presentation::services::use_services;
use crate::ui::presentation::state::{use_game_state, use_ui_state};

fn indicator_color(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "#4ade80",
        ConnectionStatus::Connecting => "#facc15",
        ConnectionStatus::Disconnected => "#f87171",
        ConnectionStatus::Failed => "#ef4444",
    }
}

fn status_text(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "Conectado",
        ConnectionStatus::Connecting => "Conectando...",
        ConnectionStatus::Disconnected => "Desconectado",
        ConnectionStatus::Failed => "Falha na conexão",
    }
}

#[component]
pub fn Header() -> Element {
    let services = use_services();
    let game_state = use_game_state();
    let mut ui_state = use_ui_state();

    let session = game_state.session.read();
    let status = session.connection.unwrap_or(ConnectionStatus::Disconnected);
    let user = session.user.clone();
    drop(session);

    rsx! {
        header {
            class: "header",

            h1 { class: "header-title", "🔍 Detetive Generativo" }

            div {
                class: "header-status",

                span {
                    class: "status-dot",
                    style: "background-color: {indicator_color(status)};",
                }
                span { class: "status-text", "{status_text(status)}" }
            }

            div {
                class: "header-auth",

                if let Some(user) = user {
                    span { class: "header-username", "{user.username}" }
                    button {
                        class: "header-button",
                        onclick: move |_| {
                            let api = services.api.clone();
                            let mut session = game_state.session;
                            spawn(async move {
                                if let Err(e) = api.logout().await {
                                    tracing::warn!("Logout request failed: {}", e);
                                }
                                session.write().clear_user();
                            });
                        },
                        "Sair"
                    }
                } else {
                    button {
                        class: "header-button",
                        onclick: move |_| ui_state.open_auth(),
                        "Entrar"
                    }
                }
            }
        }
    }
}
