//! Command bus for sending messages to the narrator server.
//!
//! All outbound traffic is fire-and-forget: the game protocol has no
//! request-response correlation, the server answers through its own event
//! stream. Send failures are logged at the call site, never surfaced to the
//! transcript.

use anyhow::Result;
use tokio::sync::mpsc;

use detetive_protocol::ClientMessage;

/// Message types sent through the command bus to the WebSocket bridge.
#[derive(Debug)]
pub enum BusMessage {
    /// Fire-and-forget command
    Send(ClientMessage),
}

/// Command bus for sending messages to the narrator server.
///
/// A concrete struct (not a trait) that can be cloned and shared; services
/// depend on this directly rather than through a trait object.
#[derive(Clone)]
pub struct CommandBus {
    tx: mpsc::Sender<BusMessage>,
}

impl CommandBus {
    pub fn new(tx: mpsc::Sender<BusMessage>) -> Self {
        Self { tx }
    }

    /// Queue a message for the bridge task.
    ///
    /// Returns an error when the bridge has shut down or the queue is full;
    /// callers log and drop, the UI stays interactive.
    pub fn send(&self, message: ClientMessage) -> Result<()> {
        self.tx
            .try_send(BusMessage::Send(message))
            .map_err(|e| anyhow::anyhow!("CommandBus send failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_queues_message_for_bridge() {
        let (tx, mut rx) = mpsc::channel(10);
        let bus = CommandBus::new(tx);

        bus.send(ClientMessage::EndGame).unwrap();

        let received = rx.recv().await.unwrap();
        assert!(matches!(received, BusMessage::Send(ClientMessage::EndGame)));
    }

    #[tokio::test]
    async fn send_fails_when_bridge_is_gone() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let bus = CommandBus::new(tx);

        assert!(bus.send(ClientMessage::EndGame).is_err());
    }
}
