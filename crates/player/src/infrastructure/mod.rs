//! Infrastructure adapters: HTTP client, WebSocket transport, event plumbing.

pub mod http_client;
pub mod message_translator;
pub mod messaging;
pub mod websocket;
