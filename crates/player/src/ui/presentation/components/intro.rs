//! Landing screen shown before the story list.

use dioxus::prelude::*;

use crate::ui::presentation::state::use_game_state;

#[component]
pub fn Intro() -> Element {
    let game_state = use_game_state();

    rsx! {
        div {
            class: "screen intro-screen",

            div {
                class: "intro-card",

                h2 { class: "intro-title", "Bem-vindo, detetive" }

                p {
                    class: "intro-text",
                    "Mistérios narrados por uma inteligência artificial esperam por você. "
                    "Converse com suspeitos, examine pistas e desvende o caso antes que o "
                    "tempo acabe."
                }

                p {
                    class: "intro-text",
                    "Cada investigação é única: o narrador improvisa a história conforme "
                    "as suas decisões."
                }

                button {
                    class: "primary-button",
                    onclick: move |_| {
                        let mut game_state = game_state;
                        game_state.session.write().show_selection();
                    },
                    "Iniciar Investigação"
                }
            }
        }
    }
}
