//! Inbound HTTP handling: routing, request validation and dispatch

pub mod envelope;
pub mod handler;
pub mod helpers;
pub mod interactive_handler;
pub mod parsing;
pub mod signature;
pub mod slash_handler;
pub mod view_submission;

// Re-export the router and state for convenience
pub use handler::{AppState, router};
