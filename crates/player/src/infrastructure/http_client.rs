//! HTTP client for the narrator backend's REST endpoints.
//!
//! Covers the story catalog, auth (cookie-backed sessions), and per-story
//! ranking. When the offline fallback is enabled, catalog fetches degrade to
//! a static mock catalog so the UI stays usable without a backend; auth and
//! ranking never fall back.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use detetive_protocol::{ApiMessage, AuthResponse, Duracao, Historia, RankingEntry, User, UserStatus};

use crate::config::PlayerConfig;

/// Errors surfaced by the REST client.
///
/// Display strings are user-facing (they end up in the auth form or the
/// transcript), so they carry the backend's Portuguese voice.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure (refused, timeout, DNS).
    #[error("Erro de conexão")]
    Network(#[source] reqwest::Error),
    /// Non-2xx response; message comes from the server body when present.
    #[error("{message}")]
    Status { code: u16, message: String },
    /// 2xx response with an undecodable body.
    #[error("Resposta inválida do servidor")]
    Decode(#[source] reqwest::Error),
}

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

/// REST client for the narrator backend.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    offline_fallback: bool,
}

impl ApiClient {
    pub fn new(config: &PlayerConfig) -> Self {
        // Cookie store carries the backend session for credentialed calls.
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.http_base_url.trim_end_matches('/').to_string(),
            offline_fallback: config.offline_fallback,
        }
    }

    /// Fetch the story catalog, degrading to the mock catalog when the
    /// offline fallback is enabled.
    pub async fn fetch_historias(&self) -> Result<Vec<Historia>, ApiError> {
        match self.get_historias().await {
            Ok(historias) => Ok(historias),
            Err(e) if self.offline_fallback => {
                tracing::warn!("Backend unavailable ({}), using mock catalog", e);
                Ok(mock_historias())
            }
            Err(e) => Err(e),
        }
    }

    async fn get_historias(&self) -> Result<Vec<Historia>, ApiError> {
        let response = self
            .client
            .get(format!("{}/historias", self.base_url))
            .send()
            .await
            .map_err(ApiError::Network)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        response.json().await.map_err(ApiError::Decode)
    }

    /// Query the current auth status (credentialed via the cookie store).
    pub async fn user_status(&self) -> Result<UserStatus, ApiError> {
        let response = self
            .client
            .get(format!("{}/user_status", self.base_url))
            .send()
            .await
            .map_err(ApiError::Network)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        response.json().await.map_err(ApiError::Decode)
    }

    /// Authenticate; on success the session cookie is stored by the client.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let response = self
            .client
            .post(format!("{}/login", self.base_url))
            .json(&Credentials { username, password })
            .send()
            .await
            .map_err(ApiError::Network)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let auth: AuthResponse = response.json().await.map_err(ApiError::Decode)?;
        Ok(User {
            id: auth.user_id,
            username: auth.username,
        })
    }

    /// Create an account. The caller chains into `login` with the same
    /// credentials on success.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/register", self.base_url))
            .json(&Credentials { username, password })
            .send()
            .await
            .map_err(ApiError::Network)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(())
    }

    /// Clear the server-side session.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/logout", self.base_url))
            .send()
            .await
            .map_err(ApiError::Network)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(())
    }

    /// Fetch the ranking list for one story.
    pub async fn ranking(&self, historia_id: &str) -> Result<Vec<RankingEntry>, ApiError> {
        let response = self
            .client
            .get(format!("{}/ranking/{}", self.base_url, historia_id))
            .send()
            .await
            .map_err(ApiError::Network)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        response.json().await.map_err(ApiError::Decode)
    }
}

async fn error_from_response(response: reqwest::Response) -> ApiError {
    let code = response.status().as_u16();
    let message = match response.json::<ApiMessage>().await {
        Ok(body) => body.message,
        Err(_) => format!("Erro HTTP {code}"),
    };
    ApiError::Status { code, message }
}

/// Static catalog used when the backend is unreachable and the offline
/// fallback is enabled.
pub fn mock_historias() -> Vec<Historia> {
    let todas = vec![Duracao::Curta, Duracao::Media, Duracao::Longa];
    vec![
        Historia {
            id: "1".to_string(),
            titulo: "O Mistério da Mansão Abandonada".to_string(),
            resumo: "Uma antiga mansão esconde segredos sombrios. Investigue os mistérios \
                     que rondam esta propriedade abandonada."
                .to_string(),
            duracoes: todas.clone(),
        },
        Historia {
            id: "2".to_string(),
            titulo: "O Caso do Diamante Desaparecido".to_string(),
            resumo: "Um valioso diamante foi roubado do museu. Use suas habilidades de \
                     detetive para descobrir o culpado."
                .to_string(),
            duracoes: todas.clone(),
        },
        Historia {
            id: "3".to_string(),
            titulo: "Assassinato no Expresso Noturno".to_string(),
            resumo: "Um crime foi cometido durante uma viagem de trem. Interrogue os \
                     passageiros e descubra a verdade."
                .to_string(),
            duracoes: todas,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_catalog_offers_every_duration() {
        let historias = mock_historias();
        assert_eq!(historias.len(), 3);
        for historia in &historias {
            assert_eq!(historia.duracoes.len(), 3);
        }
    }

    #[test]
    fn status_error_displays_server_message() {
        let error = ApiError::Status {
            code: 401,
            message: "Credenciais inválidas".to_string(),
        };
        assert_eq!(error.to_string(), "Credenciais inválidas");
    }
}
