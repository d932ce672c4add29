//! Copy-back use case

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::status::Status;

use super::bridge_resolver::{BridgeResolver, Resolved};
use super::screen::Screen;

/// Outcome of a copy action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The host wrote the clipboard
    CopiedByHost,
    /// The clipboard was written directly
    CopiedDirectly,
    Failed,
}

impl CopyOutcome {
    /// Whether the content reached the clipboard
    pub fn is_copied(&self) -> bool {
        !matches!(self, Self::Failed)
    }
}

/// Copies an entry's original content back to the system clipboard
pub struct CopyHandler {
    bridge: Arc<BridgeResolver>,
    screen: Screen,
}

impl CopyHandler {
    /// Create a copy handler
    pub fn new(bridge: Arc<BridgeResolver>, screen: Screen) -> Self {
        Self { bridge, screen }
    }

    /// Copy `content`. Failures end up in the status line and the log.
    pub async fn copy(&self, content: &str) -> CopyOutcome {
        match self.bridge.copy_to_clipboard(content).await {
            Ok(resolved) => {
                self.screen.status(Status::CopyComplete);
                match resolved {
                    Resolved::Host(()) => CopyOutcome::CopiedByHost,
                    _ => CopyOutcome::CopiedDirectly,
                }
            }
            Err(e) => {
                error!(error = %e, "Copy failed");
                self.screen.status(Status::CopyFailed);
                CopyOutcome::Failed
            }
        }
    }

    /// Copy the committed entry at `index`, the row activation path.
    ///
    /// Returns `None` when the committed list has no such row.
    pub async fn copy_row(&self, index: usize) -> Option<CopyOutcome> {
        let Some(entry) = self.screen.reader().get(index) else {
            debug!(index, "No entry at index");
            return None;
        };
        Some(self.copy(entry.content()).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::Capability;
    use crate::application::testing::{RecordingClipboard, Rig};
    use crate::domain::Entry;
    use crate::infrastructure::HostReturn;
    use serde_json::json;
    use std::sync::Mutex;

    fn handler(rig: &Rig) -> CopyHandler {
        CopyHandler::new(Arc::clone(&rig.bridge), rig.screen.clone())
    }

    #[tokio::test]
    async fn host_copy_reports_complete() {
        let rig = Rig::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        rig.host.bind_capability(Capability::CopyToClipboard, move |args| {
            sink.lock().unwrap().push(args[0].clone());
            HostReturn::ready(json!({ "success": true }))
        });

        let outcome = handler(&rig).copy("payload").await;

        assert_eq!(outcome, CopyOutcome::CopiedByHost);
        assert_eq!(*seen.lock().unwrap(), vec![json!("payload")]);
        assert!(rig.clipboard.written.lock().unwrap().is_empty());
        assert_eq!(rig.surface.last_status().as_deref(), Some("copy complete"));
    }

    #[tokio::test]
    async fn host_error_payload_reports_failure() {
        let rig = Rig::new();
        rig.host.bind_capability(Capability::CopyToClipboard, |_| {
            HostReturn::ready(json!({ "error": "clipboard busy" }))
        });

        let outcome = handler(&rig).copy("payload").await;

        assert_eq!(outcome, CopyOutcome::Failed);
        assert!(!outcome.is_copied());
        assert_eq!(rig.surface.last_status().as_deref(), Some("copy failed"));
    }

    #[tokio::test]
    async fn no_host_copies_directly() {
        let rig = Rig::new();

        let outcome = handler(&rig).copy("direct").await;

        assert_eq!(outcome, CopyOutcome::CopiedDirectly);
        assert_eq!(*rig.clipboard.written.lock().unwrap(), vec!["direct".to_string()]);
        assert_eq!(rig.surface.last_status().as_deref(), Some("copy complete"));
    }

    #[tokio::test]
    async fn direct_copy_failure_reports_failure() {
        let rig = Rig::with_clipboard(RecordingClipboard {
            fail: true,
            ..Default::default()
        });

        assert_eq!(handler(&rig).copy("x").await, CopyOutcome::Failed);
        assert_eq!(rig.surface.last_status().as_deref(), Some("copy failed"));
    }

    #[tokio::test]
    async fn copy_row_uses_untruncated_content() {
        let rig = Rig::new();
        let long = "z".repeat(250);
        rig.writer.replace(
            vec![
                Entry::without_timestamp("short"),
                Entry::without_timestamp(long.clone()),
            ]
            .into(),
        );

        let outcome = handler(&rig).copy_row(1).await;

        assert_eq!(outcome, Some(CopyOutcome::CopiedDirectly));
        assert_eq!(*rig.clipboard.written.lock().unwrap(), vec![long]);
    }

    #[tokio::test]
    async fn copy_row_out_of_range_does_nothing() {
        let rig = Rig::new();
        assert!(handler(&rig).copy_row(0).await.is_none());
        assert!(rig.surface.last_status().is_none());
    }
}
