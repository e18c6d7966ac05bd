//! WebSocket bridge - connects CommandBus/EventBus to the NarratorClient.
//!
//! `create_connection` sets up:
//! - A CommandBus for sending commands
//! - An EventBus for receiving session events
//! - A background task that bridges these to the WebSocket transport
//!
//! Establishing a second connection requires a new `create_connection` call;
//! within one `Connection` the socket is opened exactly once.

use std::sync::atomic::AtomicU8;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::infrastructure::message_translator;
use crate::infrastructure::messaging::{
    set_connection_state, BusMessage, CommandBus, ConnectionHandle, ConnectionState,
    ConnectionStateObserver, EventBus,
};
use crate::ports::outbound::SessionEvent;

/// Result of creating a connection.
///
/// Contains all the pieces needed to use the connection:
/// - `command_bus`: Send commands to the server
/// - `event_bus`: Subscribe to session events
/// - `handle`: Control connection lifecycle (must stay alive)
/// - `state_observer`: Observe connection state (for UI binding)
pub struct Connection {
    pub command_bus: CommandBus,
    pub event_bus: EventBus,
    pub handle: ConnectionHandle,
    pub state_observer: ConnectionStateObserver,
}

pub fn create_connection(url: &str) -> Connection {
    // Create channels
    let (cmd_tx, cmd_rx) = mpsc::channel::<BusMessage>(32);
    let (disconnect_tx, disconnect_rx) = oneshot::channel::<()>();

    // Create shared state
    let state = Arc::new(AtomicU8::new(ConnectionState::Disconnected.to_u8()));

    // Create buses
    let command_bus = CommandBus::new(cmd_tx);
    let event_bus = EventBus::new();
    let state_observer = ConnectionStateObserver::new(Arc::clone(&state));

    // Spawn bridge task
    let client = super::NarratorClient::new(url);
    let event_bus_for_bridge = event_bus.clone();
    let state_for_bridge = Arc::clone(&state);

    tokio::spawn(async move {
        bridge_task(client, cmd_rx, disconnect_rx, event_bus_for_bridge, state_for_bridge).await;
    });

    // Create handle
    let handle = ConnectionHandle::new(Arc::clone(&state), disconnect_tx);

    Connection {
        command_bus,
        event_bus,
        handle,
        state_observer,
    }
}

/// Spawn the single dispatcher task that drains events into the bus.
///
/// Callbacks feed this channel synchronously and one task awaits each
/// `dispatch` before the next, so subscribers observe events exactly in
/// arrival order. Spawning a task per event would let the runtime
/// interleave them.
fn spawn_event_dispatcher(event_bus: EventBus) -> mpsc::UnboundedSender<SessionEvent> {
    let (tx, mut rx) = mpsc::unbounded_channel::<SessionEvent>();

    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            event_bus.dispatch(event).await;
        }
    });

    tx
}

async fn bridge_task(
    client: super::NarratorClient,
    mut cmd_rx: mpsc::Receiver<BusMessage>,
    mut disconnect_rx: oneshot::Receiver<()>,
    event_bus: EventBus,
    state: Arc<AtomicU8>,
) {
    let event_tx = spawn_event_dispatcher(event_bus);

    // Connection state changes are mirrored into the shared atomic and
    // queued for the dispatcher so the session reducer sees them in order.
    let state_for_callback = Arc::clone(&state);
    let event_tx_for_state = event_tx.clone();
    client
        .set_on_state_change(move |conn_state| {
            set_connection_state(&state_for_callback, conn_state);
            let _ = event_tx_for_state.send(SessionEvent::StateChanged(conn_state.to_status()));
        })
        .await;

    // Inbound messages are translated and queued behind any earlier events.
    client
        .set_on_message(move |msg| {
            let event = message_translator::translate(msg);
            let _ = event_tx.send(SessionEvent::MessageReceived(event));
        })
        .await;

    // The client runs the socket until it closes; commands flow beside it.
    let connect_client = client.clone();
    let connect_handle = tokio::spawn(async move {
        if let Err(e) = connect_client.connect().await {
            tracing::error!("Connection attempt failed: {}", e);
        }
    });

    // Main loop: process commands until disconnect
    loop {
        tokio::select! {
            // Handle disconnect request
            _ = &mut disconnect_rx => {
                tracing::info!("Disconnect requested");
                client.disconnect().await;
                break;
            }

            // Handle outgoing commands
            Some(bus_msg) = cmd_rx.recv() => {
                match bus_msg {
                    BusMessage::Send(msg) => {
                        if let Err(e) = client.send(msg).await {
                            tracing::warn!("Failed to send message: {}", e);
                        }
                    }
                }
            }
        }
    }

    connect_handle.abort();
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    use crate::ports::outbound::PlayerEvent;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn dispatcher_preserves_arrival_order() {
        let event_bus = EventBus::new();

        let received = Arc::new(StdMutex::new(Vec::new()));
        let received_for_subscriber = Arc::clone(&received);
        event_bus
            .subscribe(move |event| {
                if let SessionEvent::MessageReceived(PlayerEvent::System { message }) = event {
                    let seq: usize = message.parse().unwrap();
                    received_for_subscriber.lock().unwrap().push(seq);
                }
            })
            .await;

        let tx = spawn_event_dispatcher(event_bus);

        // Synchronous back-to-back sends, like the reader callback firing
        // for consecutive frames.
        let total = 2000;
        for seq in 0..total {
            tx.send(SessionEvent::MessageReceived(PlayerEvent::System {
                message: seq.to_string(),
            }))
            .unwrap();
        }

        for _ in 0..500 {
            if received.lock().unwrap().len() == total {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let received = received.lock().unwrap();
        assert_eq!(received.len(), total);
        assert!(
            received.windows(2).all(|w| w[0] < w[1]),
            "events were reordered"
        );
    }
}
