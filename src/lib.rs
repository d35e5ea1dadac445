//! fetchview library exports for testing

pub mod core;
pub mod fetch;
pub mod interaction;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use interaction::{DisplaySink, InteractionHandler, StalePolicy};
