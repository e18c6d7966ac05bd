//! Detetive Generativo - composition root binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use detetive_player::config::PlayerConfig;

/// Inline stylesheet injected into the webview head.
const APP_CSS: &str = include_str!("../assets/app.css");

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "detetive_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = PlayerConfig::from_env();
    tracing::info!(
        http = %config.http_base_url,
        ws = %config.ws_url,
        "Starting Detetive Generativo player"
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(
            dioxus_desktop::Config::new()
                .with_window(
                    dioxus_desktop::WindowBuilder::new().with_title("Detetive Generativo"),
                )
                .with_custom_head(format!("<style>{APP_CSS}</style>")),
        )
        .with_context(config)
        .launch(detetive_player::app);
}
