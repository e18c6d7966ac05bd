//! Presentation layer: components, state signals, services context, and the
//! handlers that feed application events into them.

pub mod components;
pub mod handlers;
pub mod services;
pub mod state;

pub use services::Services;
