//! Wayland clipboard adapter using wl-copy

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{Clipboard, ClipboardError};

/// Plain text, so wl-copy does not guess a MIME type from the content
const TEXT_MIME: &str = "text/plain;charset=utf-8";

/// Wayland clipboard adapter using wl-copy
#[derive(Debug, Clone)]
pub struct WaylandClipboard {
    program: String,
}

impl WaylandClipboard {
    /// Create a new Wayland clipboard adapter
    pub fn new() -> Self {
        Self::with_program("wl-copy")
    }

    /// Use a different wl-copy executable
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for WaylandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for WaylandClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(["--type", TEXT_MIME])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ClipboardError::WlCopyNotFound
                } else {
                    ClipboardError::CopyFailed(e.to_string())
                }
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;
            // Closing stdin lets wl-copy take ownership and exit
            drop(stdin);
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;

        if !status.success() {
            return Err(ClipboardError::CopyFailed(format!(
                "wl-copy exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_program_reports_not_found() {
        let clipboard = WaylandClipboard::with_program("definitely-not-a-real-wl-copy");
        let err = clipboard.copy("text").await.unwrap_err();
        assert!(matches!(err, ClipboardError::WlCopyNotFound));
    }
}
