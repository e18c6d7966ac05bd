//! REST DTOs and shared vocabulary types.
//!
//! These mirror the backend's JSON bodies exactly; the application layer
//! builds its own view types on top of them where needed.

use serde::{Deserialize, Serialize};

/// An authenticated user as known to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Coarse story length selector affecting server-side pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duracao {
    Curta,
    Media,
    Longa,
}

impl Duracao {
    /// Human-facing label shown on story cards.
    pub fn label(self) -> &'static str {
        match self {
            Duracao::Curta => "Curta (3-5 min)",
            Duracao::Media => "Média (10-15 min)",
            Duracao::Longa => "Longa (20-30 min)",
        }
    }
}

/// A selectable mystery story from the server catalog.
///
/// Immutable on the client; fetched from `GET /historias`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Historia {
    pub id: String,
    pub titulo: String,
    pub resumo: String,
    pub duracoes: Vec<Duracao>,
}

/// A suggested follow-up action attached to a narrator message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedOption {
    pub texto: String,
    pub comando: String,
}

/// One row of the per-story ranking list (`GET /ranking/{historia_id}`).
///
/// Timestamps are kept as opaque server-formatted strings; the client only
/// displays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub username: String,
    pub score: i64,
    pub duration: Duracao,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// Response body of `GET /user_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatus {
    pub is_authenticated: bool,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Success body of `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user_id: i64,
    pub username: String,
}

/// Generic `{"message": ...}` body used by the backend for errors and acks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duracao_serializes_lowercase() {
        let json = serde_json::to_string(&Duracao::Media).unwrap();
        assert_eq!(json, "\"media\"");

        let back: Duracao = serde_json::from_str("\"longa\"").unwrap();
        assert_eq!(back, Duracao::Longa);
    }

    #[test]
    fn historia_decodes_catalog_entry() {
        let json = r#"{
            "id": "1",
            "titulo": "O Mistério da Mansão Abandonada",
            "resumo": "Uma antiga mansão esconde segredos sombrios.",
            "duracoes": ["curta", "media", "longa"]
        }"#;

        let historia: Historia = serde_json::from_str(json).unwrap();
        assert_eq!(historia.id, "1");
        assert_eq!(historia.duracoes.len(), 3);
        assert_eq!(historia.duracoes[0], Duracao::Curta);
    }

    #[test]
    fn ranking_entry_tolerates_missing_end_time() {
        let json = r#"{
            "username": "sherlock",
            "score": 87,
            "duration": "curta",
            "start_time": "2025-06-01T20:15:00Z"
        }"#;

        let entry: RankingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.score, 87);
        assert!(entry.end_time.is_none());
    }
}
