//! Application layer: session state machine, transcript normalization,
//! and the services that bind them to the transports.

pub mod services;
pub mod session;
pub mod transcript;
