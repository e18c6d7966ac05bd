//! Port contracts between the application layer and its adapters.

pub mod outbound;
