//! Application layer - Use cases and port interfaces
//!
//! Contains the refresh loop, the user-triggered handlers, the renderer
//! and the trait definitions for external system interactions.

pub mod about;
pub mod bridge_resolver;
pub mod clear;
pub mod copy;
pub mod history_store;
pub mod ports;
pub mod refresh;
pub mod renderer;
pub mod screen;

#[cfg(test)]
mod testing;

// Re-export use cases
pub use about::AboutHandler;
pub use bridge_resolver::{BridgeResolver, Resolved};
pub use clear::{ClearHandler, ClearOutcome, CLEAR_PROMPT};
pub use copy::{CopyHandler, CopyOutcome};
pub use history_store::{history_store, HistoryReader, HistoryWriter};
pub use refresh::{RefreshLoop, RefreshOutcome};
pub use renderer::{CopyTrigger, HistoryView, RenderedRow, Renderer};
pub use screen::Screen;
