//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: host
//! bridges, clipboard writers, config storage and rendering surfaces.

pub mod bridge;
pub mod clipboard;
pub mod config;
pub mod surface;

// Re-export adapters
pub use bridge::{create_bridge, FunctionTableBridge, HostReturn, HttpBridge, NullBridge};
pub use clipboard::{create_clipboard, ArboardClipboard, WaylandClipboard};
pub use config::XdgConfigStore;
pub use surface::{HtmlFileSurface, TerminalMode, TerminalSurface};
