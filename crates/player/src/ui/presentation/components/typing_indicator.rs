//! Animated indicator while the narrator composes a reply.

use dioxus::prelude::*;

#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        div {
            class: "typing-indicator",

            span { class: "typing-label", "O narrador está escrevendo" }
            span { class: "typing-dot", "." }
            span { class: "typing-dot", "." }
            span { class: "typing-dot", "." }
        }
    }
}
