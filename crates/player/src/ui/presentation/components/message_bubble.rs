//! One transcript entry, rendered as a chat bubble.

use dioxus::prelude::*;

use crate::application::transcript::{ChatMessage, MessageKind};

#[derive(Props, Clone, PartialEq)]
pub struct MessageBubbleProps {
    pub message: ChatMessage,
    /// Called with the option's command when a quick action is clicked.
    pub on_option: EventHandler<String>,
}

fn kind_class(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::User => "bubble bubble-user",
        MessageKind::Narrator => "bubble bubble-narrator",
        MessageKind::CharacterSpeech => "bubble bubble-speech",
        MessageKind::System => "bubble bubble-system",
        MessageKind::Error => "bubble bubble-error",
        MessageKind::GameOver => "bubble bubble-game-over",
    }
}

#[component]
pub fn MessageBubble(props: MessageBubbleProps) -> Element {
    let on_option = props.on_option;
    let message = &props.message;
    let time = message.time_label();

    rsx! {
        div {
            class: "{kind_class(message.kind)}",

            div {
                class: "bubble-meta",
                span { class: "bubble-sender", "{message.sender}" }
                span { class: "bubble-time", "{time}" }
            }

            p { class: "bubble-content", "{message.content}" }

            if !message.options.is_empty() {
                div {
                    class: "bubble-options",

                    for option in message.options.iter() {
                        button {
                            key: "{option.comando}",
                            class: "option-button",
                            onclick: {
                                let comando = option.comando.clone();
                                move |_| on_option.call(comando.clone())
                            },
                            "{option.texto}"
                        }
                    }
                }
            }
        }
    }
}
