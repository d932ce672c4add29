//! Cross-platform clipboard adapter using arboard
//!
//! On X11 and Wayland the copied text lives only as long as the owning
//! clipboard handle, so one handle is opened lazily and kept for the
//! lifetime of the adapter.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError};

/// Cross-platform clipboard adapter using arboard
#[derive(Clone, Default)]
pub struct ArboardClipboard {
    handle: Arc<Mutex<Option<arboard::Clipboard>>>,
}

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a clipboard handle has been opened
    pub fn is_open(&self) -> bool {
        self.handle
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        let handle = Arc::clone(&self.handle);

        // arboard operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut guard = handle.lock().unwrap_or_else(|e| e.into_inner());

            if guard.is_none() {
                let clipboard = arboard::Clipboard::new()
                    .map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))?;
                *guard = Some(clipboard);
            }

            match guard.as_mut() {
                Some(clipboard) => clipboard
                    .set_text(text)
                    .map_err(|e| ClipboardError::CopyFailed(e.to_string())),
                None => Err(ClipboardError::ClipboardUnavailable(
                    "clipboard handle missing".to_string(),
                )),
            }
        })
        .await
        .map_err(|e| ClipboardError::CopyFailed(format!("Task join error: {}", e)))?
    }
}
