//! Session service owning the WebSocket connection lifecycle.
//!
//! Wraps one `Connection` (command bus, event bus, lifecycle handle) and
//! exposes the pieces the UI needs: a command bus for the game service and a
//! channel of `SessionEvent`s for the reducer. The translation from wire
//! format (`ServerMessage`) to `PlayerEvent` happens in the infrastructure
//! layer, so this service never sees the protocol directly.

use std::sync::Mutex;

use tokio::sync::mpsc;

use crate::infrastructure::messaging::{
    CommandBus, ConnectionHandle, ConnectionStateObserver, EventBus,
};
use crate::infrastructure::websocket::{create_connection, Connection};
use crate::ports::outbound::SessionEvent;

/// Owns the connection for the lifetime of the app.
///
/// The `ConnectionHandle` is held here; calling `disconnect` tears the
/// socket down. There is no reconnect: a dropped connection stays down until
/// the app restarts.
pub struct SessionService {
    command_bus: CommandBus,
    event_bus: EventBus,
    state_observer: ConnectionStateObserver,
    handle: Mutex<Option<ConnectionHandle>>,
}

impl SessionService {
    /// Open the connection and start the bridge task.
    ///
    /// Must run inside a tokio runtime; the bridge task is spawned here.
    pub fn new(ws_url: &str) -> Self {
        let Connection {
            command_bus,
            event_bus,
            handle,
            state_observer,
        } = create_connection(ws_url);

        Self {
            command_bus,
            event_bus,
            state_observer,
            handle: Mutex::new(Some(handle)),
        }
    }

    pub fn command_bus(&self) -> CommandBus {
        self.command_bus.clone()
    }

    pub fn state_observer(&self) -> ConnectionStateObserver {
        self.state_observer.clone()
    }

    /// Subscribe to session events.
    ///
    /// Events are forwarded in dispatch order; the receiver side applies
    /// them to the session reducer one at a time.
    pub async fn subscribe(&self) -> mpsc::UnboundedReceiver<SessionEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.event_bus
            .subscribe(move |event| {
                let _ = tx.send(event);
            })
            .await;
        rx
    }

    /// Tear the connection down. Idempotent; later calls are no-ops.
    pub fn disconnect(&self) {
        let handle = match self.handle.lock() {
            Ok(mut guard) => guard.take(),
            Err(_) => None,
        };
        if let Some(handle) = handle {
            handle.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use detetive_protocol::ClientMessage;

    #[tokio::test]
    async fn disconnect_is_idempotent_and_stops_the_bridge() {
        // Nothing listens on this port; the bridge task still starts and
        // must honor the disconnect signal.
        let service = SessionService::new("ws://127.0.0.1:9/ws");

        service.disconnect();
        service.disconnect();

        // Give the bridge task a chance to exit, then the command queue
        // should be closed.
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        assert!(service.command_bus().send(ClientMessage::EndGame).is_err());
    }
}
