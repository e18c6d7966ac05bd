//! Outbound ports - contracts the application needs from infrastructure.

pub mod player_events;

pub use player_events::{ConnectionStatus, PlayerEvent, SessionEvent};
