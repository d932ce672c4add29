//! Clipboard infrastructure module
//!
//! Direct clipboard writes for copy-back when the host cannot copy.

mod arboard;
mod wayland;

pub use arboard::ArboardClipboard;
pub use wayland::WaylandClipboard;

use std::sync::Arc;

use crate::application::ports::Clipboard;
use crate::domain::config::ClipboardTool;

/// Create the clipboard adapter for `tool`
pub fn create_clipboard(tool: ClipboardTool) -> Arc<dyn Clipboard> {
    match tool {
        ClipboardTool::Arboard => Arc::new(ArboardClipboard::new()),
        ClipboardTool::WlCopy => Arc::new(WaylandClipboard::new()),
    }
}
