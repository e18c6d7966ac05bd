//! WebSocket message types for Player-server communication.
//!
//! Both enums use an internally-tagged `type` field so the JSON on the wire
//! matches the backend's event names (`start_game`, `narrator_message`, ...).

use serde::{Deserialize, Serialize};

use crate::types::SuggestedOption;

/// How the player framed a turn in the composer.
///
/// The content is always the trimmed free text; only this tag changes per
/// mode. This is the single fixed encoding for the three composition modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComposeMode {
    Talk,
    Act,
    Contemplate,
}

/// Messages from the Player to the narrator server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Begin a game session for the chosen story and pacing tier.
    StartGame {
        historia_id: String,
        duracao: crate::types::Duracao,
    },
    /// One player turn of free text, tagged with its composition mode.
    UserMessage {
        content: String,
        type_original: ComposeMode,
    },
    /// Abandon the current session.
    EndGame,
}

/// Messages from the narrator server to the Player.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Out-of-band notice (session bookkeeping, connection hints).
    SystemMessage { message: String },
    /// Story progression text, possibly embedding character speech and
    /// suggested follow-up actions.
    NarratorMessage {
        message: String,
        #[serde(default)]
        options: Option<Vec<SuggestedOption>>,
    },
    /// Server-reported failure for the current session.
    ErrorMessage { message: String },
    /// Terminal message; the session is over on the server side.
    GameOver { message: String },
    /// The server bound this connection to an authenticated user.
    UserAuthenticated { user_id: i64, username: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_game_uses_wire_tag_and_fields() {
        let msg = ClientMessage::StartGame {
            historia_id: "2".to_string(),
            duracao: crate::types::Duracao::Curta,
        };

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "start_game");
        assert_eq!(json["historia_id"], "2");
        assert_eq!(json["duracao"], "curta");
    }

    #[test]
    fn user_message_carries_compose_mode() {
        let msg = ClientMessage::UserMessage {
            content: "Examinar a lareira".to_string(),
            type_original: ComposeMode::Act,
        };

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "user_message");
        assert_eq!(json["type_original"], "act");
    }

    #[test]
    fn end_game_is_bare_tag() {
        let json = serde_json::to_value(&ClientMessage::EndGame).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "end_game" }));
    }

    #[test]
    fn narrator_message_decodes_with_options() {
        let json = r#"{
            "type": "narrator_message",
            "message": "Você entra na mansão.",
            "options": [
                { "texto": "Investigar", "comando": "investigar" }
            ]
        }"#;

        let msg: ServerMessage = serde_json::from_str(json).unwrap();
        match msg {
            ServerMessage::NarratorMessage { message, options } => {
                assert_eq!(message, "Você entra na mansão.");
                assert_eq!(options.unwrap().len(), 1);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn narrator_message_decodes_without_options() {
        let json = r#"{ "type": "narrator_message", "message": "Silêncio." }"#;

        let msg: ServerMessage = serde_json::from_str(json).unwrap();
        assert!(matches!(
            msg,
            ServerMessage::NarratorMessage { options: None, .. }
        ));
    }

    #[test]
    fn user_authenticated_decodes() {
        let json = r#"{ "type": "user_authenticated", "user_id": 7, "username": "poirot" }"#;

        let msg: ServerMessage = serde_json::from_str(json).unwrap();
        assert!(matches!(
            msg,
            ServerMessage::UserAuthenticated { user_id: 7, .. }
        ));
    }
}
