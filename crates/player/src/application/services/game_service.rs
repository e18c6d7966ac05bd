//! Game service: the outbound half of a running game.
//!
//! The session reducer decides WHAT to send (it owns the screen flow and
//! the transcript); this service only puts the resulting messages on the
//! command bus. Send failures are logged and dropped, the transcript is
//! never rolled back for them.

use detetive_protocol::ClientMessage;

use crate::infrastructure::messaging::CommandBus;

#[derive(Clone)]
pub struct GameService {
    bus: CommandBus,
}

impl GameService {
    pub fn new(bus: CommandBus) -> Self {
        Self { bus }
    }

    /// Emit one message produced by the session reducer.
    pub fn send(&self, message: ClientMessage) {
        if let Err(e) = self.bus.send(message) {
            tracing::warn!("Dropping outbound game message: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::sync::mpsc;

    use crate::infrastructure::messaging::BusMessage;

    #[tokio::test]
    async fn send_forwards_to_bus() {
        let (tx, mut rx) = mpsc::channel(4);
        let service = GameService::new(CommandBus::new(tx));

        service.send(ClientMessage::EndGame);

        let received = rx.recv().await.unwrap();
        assert!(matches!(received, BusMessage::Send(ClientMessage::EndGame)));
    }

    #[tokio::test]
    async fn send_failure_is_swallowed() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let service = GameService::new(CommandBus::new(tx));

        // Must not panic.
        service.send(ClientMessage::EndGame);
    }
}
