//! Detetive Generativo Player.
//!
//! This crate contains UI, application logic, and infrastructure adapters
//! for the desktop client. The narrator backend is an external collaborator
//! reached over HTTP (catalog, auth, ranking) and a WebSocket channel
//! (the turn-based game session itself).

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod ui;

// Re-export commonly used entrypoints
pub use ui::app;
