//! Translates ServerMessage from the protocol to PlayerEvent for the
//! application layer.
//!
//! All ServerMessage variants are explicitly handled, so a new wire variant
//! is a compile error here rather than a silently dropped event.

use detetive_protocol::{ServerMessage, User};

use crate::ports::outbound::PlayerEvent;

/// Translate a ServerMessage into a PlayerEvent.
pub fn translate(msg: ServerMessage) -> PlayerEvent {
    match msg {
        ServerMessage::SystemMessage { message } => PlayerEvent::System { message },

        ServerMessage::NarratorMessage { message, options } => PlayerEvent::Narrator {
            message,
            options: options.unwrap_or_default(),
        },

        ServerMessage::ErrorMessage { message } => PlayerEvent::Error { message },

        ServerMessage::GameOver { message } => PlayerEvent::GameOver { message },

        ServerMessage::UserAuthenticated { user_id, username } => PlayerEvent::UserAuthenticated {
            user: User {
                id: user_id,
                username,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrator_without_options_yields_empty_vec() {
        let event = translate(ServerMessage::NarratorMessage {
            message: "A porta range.".to_string(),
            options: None,
        });

        match event {
            PlayerEvent::Narrator { message, options } => {
                assert_eq!(message, "A porta range.");
                assert!(options.is_empty());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn user_authenticated_carries_user() {
        let event = translate(ServerMessage::UserAuthenticated {
            user_id: 3,
            username: "marple".to_string(),
        });

        assert_eq!(
            event,
            PlayerEvent::UserAuthenticated {
                user: User {
                    id: 3,
                    username: "marple".to_string()
                }
            }
        );
    }
}
