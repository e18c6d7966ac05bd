//! Per-story ranking modal.

use dioxus::prelude::*;

use detetive_protocol::RankingEntry;

use crate::ui::presentation::services::use_services;
use crate::ui::presentation::state::use_ui_state;

#[derive(Props, Clone, PartialEq)]
pub struct RankingModalProps {
    pub historia_id: String,
}

fn position_label(position: usize) -> String {
    match position {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        n => format!("{}", n + 1),
    }
}

#[component]
pub fn RankingModal(props: RankingModalProps) -> Element {
    let services = use_services();
    let mut ui_state = use_ui_state();

    let mut entries: Signal<Vec<RankingEntry>> = use_signal(Vec::new);
    let mut loading = use_signal(|| true);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    {
        let historia_id = props.historia_id.clone();
        let api = services.api.clone();

        use_effect(move || {
            let historia_id = historia_id.clone();
            let api = api.clone();

            spawn(async move {
                loading.set(true);
                error.set(None);

                match api.ranking(&historia_id).await {
                    Ok(list) => entries.set(list),
                    Err(e) => error.set(Some(e.to_string())),
                }

                loading.set(false);
            });
        });
    }

    rsx! {
        div {
            class: "overlay",
            onclick: move |_| ui_state.ranking_open.set(None),

            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "modal-header",

                    h2 { class: "modal-title", "🏆 Ranking" }

                    button {
                        class: "modal-close",
                        onclick: move |_| ui_state.ranking_open.set(None),
                        "×"
                    }
                }

                div {
                    class: "modal-body",

                    if *loading.read() {
                        div { class: "modal-placeholder", "Carregando ranking..." }
                    } else if let Some(error) = error.read().as_ref() {
                        div { class: "banner banner-error", "{error}" }
                    } else if entries.read().is_empty() {
                        div { class: "modal-placeholder", "Ninguém resolveu este caso ainda." }
                    } else {
                        table {
                            class: "ranking-table",

                            thead {
                                tr {
                                    th { "#" }
                                    th { "Detetive" }
                                    th { "Pontos" }
                                    th { "Duração" }
                                }
                            }

                            tbody {
                                for (position, entry) in entries.read().iter().enumerate() {
                                    tr {
                                        key: "{position}",
                                        td { "{position_label(position)}" }
                                        td { "{entry.username}" }
                                        td { "{entry.score}" }
                                        td { "{entry.duration.label()}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
