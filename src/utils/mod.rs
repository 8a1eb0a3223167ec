pub mod channel;

pub use channel::normalize_channel;
