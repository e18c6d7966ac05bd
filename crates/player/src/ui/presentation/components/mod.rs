//! UI components.

pub mod auth_modal;
pub mod chat_view;
pub mod header;
pub mod intro;
pub mod message_bubble;
pub mod ranking_modal;
pub mod story_selector;
pub mod typing_indicator;

pub use auth_modal::AuthModal;
pub use chat_view::ChatView;
pub use header::Header;
pub use intro::Intro;
pub use message_bubble::MessageBubble;
pub use ranking_modal::RankingModal;
pub use story_selector::StorySelector;
pub use typing_indicator::TypingIndicator;
