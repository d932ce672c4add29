//! Domain layer - Core types
//!
//! Contains history entries, status phrases, refresh state and errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod entry;
pub mod error;
pub mod refresh;
pub mod status;

// Re-export common types
pub use config::AppConfig;
pub use entry::{Entry, HistoryList};
pub use error::*;
pub use refresh::{RefreshSession, RefreshState};
pub use status::Status;
