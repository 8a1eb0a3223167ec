//! All Slack-specific functionality

pub mod blocks;
pub mod client;
pub mod message_formatter;
pub mod modal_builder;

// Re-export main types for convenience
pub use client::{SlackApi, SlackClient};
