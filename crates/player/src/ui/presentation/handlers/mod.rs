//! Event handlers bridging the application layer into presentation state.

pub mod session_event_handler;

pub use session_event_handler::handle_session_event;
