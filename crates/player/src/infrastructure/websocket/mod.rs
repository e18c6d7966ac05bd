//! WebSocket transport for the narrator session channel.

pub mod bridge;
pub mod client;

pub use bridge::{create_connection, Connection};
pub use client::NarratorClient;
