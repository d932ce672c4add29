//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod bridge;
pub mod clipboard;
pub mod config;
pub mod confirm;
pub mod surface;

// Re-export common types
pub use bridge::{BridgeError, Capability, HostBridge};
pub use clipboard::{Clipboard, ClipboardError};
pub use config::ConfigStore;
pub use confirm::{AssumeYes, Confirm};
pub use surface::{RenderSurface, HISTORY_CONTAINER_ID, STATUS_REGION_ID};
