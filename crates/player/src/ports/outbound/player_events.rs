//! Player events - outbound port data types for server messages.
//!
//! These types represent the application's view of server traffic. Adapters
//! (the WebSocket bridge and message translator) produce them; the session
//! reducer consumes them. Keeping them here means the application layer
//! never depends on wire-format types directly.

use detetive_protocol::{SuggestedOption, User};

/// Connection state as seen by the application.
///
/// The transport layer keeps its own copy of this enum for atomic storage;
/// the bridge maps between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected to the server
    Disconnected,
    /// Attempting to establish connection
    Connecting,
    /// Successfully connected
    Connected,
    /// Connection failed and will not be retried
    Failed,
}

impl ConnectionStatus {
    pub fn is_connected(self) -> bool {
        self == ConnectionStatus::Connected
    }
}

/// A message-bearing event from the narrator server.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Out-of-band notice from the server.
    System { message: String },
    /// Story progression text, possibly with suggested follow-up actions.
    Narrator {
        message: String,
        options: Vec<SuggestedOption>,
    },
    /// Server-reported failure for the current session.
    Error { message: String },
    /// Terminal message; the session ended on the server side.
    GameOver { message: String },
    /// The server bound this connection to an authenticated user.
    UserAuthenticated { user: User },
}

/// Everything the session reducer reacts to: connectivity changes plus
/// message-bearing server events, delivered in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Connection state changed
    StateChanged(ConnectionStatus),
    /// Server event received (application-layer type)
    MessageReceived(PlayerEvent),
}
