//! Detetive Generativo Protocol - shared types for Player and server communication
//!
//! This crate contains all types exchanged with the narrator backend:
//! - Wire-format DTOs (REST endpoints)
//! - WebSocket message types (ClientMessage, ServerMessage)
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and serde_json
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Server-compatible naming** - Field and tag names follow the backend's
//!    Portuguese wire vocabulary (`historia_id`, `duracao`, ...)

pub mod messages;
pub mod types;

pub use messages::{ClientMessage, ComposeMode, ServerMessage};
pub use types::{
    ApiMessage, AuthResponse, Duracao, Historia, RankingEntry, SuggestedOption, User, UserStatus,
};
