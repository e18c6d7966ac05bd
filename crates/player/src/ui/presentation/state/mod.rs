//! Presentation state signals.

pub mod game_state;
pub mod ui_state;

pub use game_state::{use_game_state, GameState};
pub use ui_state::{use_ui_state, UiState};
