//! Services binding the session core to the transports.

pub mod game_service;
pub mod session_service;

pub use game_service::GameService;
pub use session_service::SessionService;
