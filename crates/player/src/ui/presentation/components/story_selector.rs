//! Story selection screen: the catalog as cards, one per mystery.

use dioxus::prelude::*;

use detetive_protocol::{Duracao, Historia};

use crate::application::session::StartGame;
use crate::application::transcript::MessageKind;
use crate::ui::presentation::services::use_services;
use crate::ui::presentation::state::{use_game_state, use_ui_state};

#[component]
pub fn StorySelector() -> Element {
    let game_state = use_game_state();
    let ui_state = use_ui_state();

    let session = game_state.session.read();
    let historias = session.historias.clone();
    // Failed start attempts land in the transcript; surface the latest one
    // here since the chat is not visible on this screen.
    let start_error = session
        .transcript
        .iter()
        .rev()
        .find(|m| m.kind == MessageKind::Error)
        .map(|m| m.content.clone());
    drop(session);

    let catalog_error = ui_state.catalog_error.read().clone();

    rsx! {
        div {
            class: "screen selection-screen",

            h2 { class: "selection-title", "Escolha o seu caso" }

            if let Some(error) = catalog_error {
                div { class: "banner banner-error", "{error}" }
            }

            if let Some(error) = start_error {
                div { class: "banner banner-error", "{error}" }
            }

            if historias.is_empty() {
                div { class: "selection-empty", "Carregando histórias..." }
            } else {
                div {
                    class: "story-grid",

                    for historia in historias.iter() {
                        StoryCard {
                            key: "{historia.id}",
                            historia: historia.clone(),
                        }
                    }
                }
            }

            button {
                class: "link-button",
                onclick: move |_| {
                    let mut game_state = game_state;
                    game_state.session.write().show_intro();
                },
                "← Voltar"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StoryCardProps {
    historia: Historia,
}

#[component]
fn StoryCard(props: StoryCardProps) -> Element {
    let services = use_services();
    let game_state = use_game_state();
    let mut ui_state = use_ui_state();

    let historia = props.historia.clone();
    let historia_for_ranking = historia.id.clone();

    let start = move |duracao: Duracao| {
        let mut game_state = game_state;
        let outcome = game_state.session.write().start_game(&historia.id, duracao);
        match outcome {
            StartGame::Started(msg) => services.game.send(msg),
            StartGame::AuthRequired => ui_state.open_auth(),
            // The reducer already recorded the error for the banner.
            StartGame::NotConnected => {}
        }
    };

    rsx! {
        div {
            class: "story-card",

            h3 { class: "story-title", "{props.historia.titulo}" }
            p { class: "story-summary", "{props.historia.resumo}" }

            div {
                class: "story-durations",

                for duracao in props.historia.duracoes.iter() {
                    button {
                        key: "{duracao.label()}",
                        class: "duration-button",
                        onclick: {
                            let mut start = start.clone();
                            let duracao = *duracao;
                            move |_| start(duracao)
                        },
                        "{duracao.label()}"
                    }
                }
            }

            button {
                class: "link-button",
                onclick: move |_| {
                    ui_state.ranking_open.set(Some(historia_for_ranking.clone()));
                },
                "🏆 Ranking"
            }
        }
    }
}
