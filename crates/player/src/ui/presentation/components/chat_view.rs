//! The running game: transcript, typing indicator, and the turn composer.

use dioxus::prelude::*;

use detetive_protocol::ComposeMode;

use crate::ui::presentation::components::{MessageBubble, TypingIndicator};
use crate::ui::presentation::services::use_services;
use crate::ui::presentation::state::use_game_state;

fn mode_label(mode: ComposeMode) -> &'static str {
    match mode {
        ComposeMode::Talk => "Falar",
        ComposeMode::Act => "Agir",
        ComposeMode::Contemplate => "Contemplar",
    }
}

const MODES: [ComposeMode; 3] = [
    ComposeMode::Talk,
    ComposeMode::Act,
    ComposeMode::Contemplate,
];

#[component]
pub fn ChatView() -> Element {
    let services = use_services();
    let game_state = use_game_state();

    let mut input = use_signal(String::new);
    let mut mode = use_signal(|| ComposeMode::Talk);

    let session = game_state.session.read();
    let transcript = session.transcript.clone();
    let narrator_typing = session.narrator_typing;
    drop(session);

    let services_for_send = services.clone();
    let send_turn = move |text: String, mode: ComposeMode| {
        let mut game_state = game_state;
        if let Some(msg) = game_state.session.write().compose_turn(&text, mode) {
            services_for_send.game.send(msg);
        };
    };

    let submit = {
        let mut send_turn = send_turn.clone();
        move || {
            let text = input.read().clone();
            send_turn(text, *mode.read());
            input.set(String::new());
        }
    };

    rsx! {
        div {
            class: "screen chat-screen",

            div {
                class: "chat-log",

                for message in transcript.iter() {
                    MessageBubble {
                        key: "{message.id}",
                        message: message.clone(),
                        // Quick actions send the option's command as a
                        // spoken turn.
                        on_option: {
                            let mut send_turn = send_turn.clone();
                            move |comando: String| send_turn(comando, ComposeMode::Talk)
                        },
                    }
                }

                if narrator_typing {
                    TypingIndicator {}
                }
            }

            div {
                class: "composer",

                div {
                    class: "composer-modes",

                    for m in MODES {
                        button {
                            key: "{mode_label(m)}",
                            class: if *mode.read() == m { "mode-button mode-button-active" } else { "mode-button" },
                            onclick: move |_| mode.set(m),
                            "{mode_label(m)}"
                        }
                    }
                }

                div {
                    class: "composer-row",

                    input {
                        class: "composer-input",
                        r#type: "text",
                        placeholder: "O que você faz, detetive?",
                        value: "{input}",
                        oninput: move |e| input.set(e.value()),
                        onkeydown: {
                            let mut submit = submit.clone();
                            move |e: KeyboardEvent| {
                                if e.key() == Key::Enter {
                                    submit();
                                }
                            }
                        },
                    }

                    button {
                        class: "primary-button",
                        onclick: {
                            let mut submit = submit.clone();
                            move |_| submit()
                        },
                        "Enviar"
                    }
                }

                button {
                    class: "link-button",
                    onclick: move |_| {
                        let mut game_state = game_state;
                        let msg = game_state.session.write().end_game();
                        services.game.send(msg);
                    },
                    "Encerrar Caso"
                }
            }
        }
    }
}
