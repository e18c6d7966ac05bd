//! Service context shared across the component tree.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::application::services::{GameService, SessionService};
use crate::config::PlayerConfig;
use crate::infrastructure::http_client::ApiClient;

/// Long-lived services, built once at the root and provided via context.
#[derive(Clone)]
pub struct Services {
    pub api: ApiClient,
    pub session: Arc<SessionService>,
    pub game: GameService,
}

impl Services {
    /// Open the backend connection and wire the services together.
    pub fn new(config: &PlayerConfig) -> Self {
        let api = ApiClient::new(config);
        let session = Arc::new(SessionService::new(&config.ws_url));
        let game = GameService::new(session.command_bus());

        Self { api, session, game }
    }
}

pub fn use_services() -> Services {
    use_context::<Services>()
}
