//! Test doubles shared by the use case tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError, Confirm, RenderSurface};
use crate::application::renderer::HistoryView;
use crate::application::{history_store, BridgeResolver, HistoryWriter, Renderer, Screen};
use crate::domain::status::Status;
use crate::infrastructure::FunctionTableBridge;

/// Surface remembering everything drawn on it
#[derive(Default)]
pub struct RecordingSurface {
    pub views: Mutex<Vec<HistoryView>>,
    pub statuses: Mutex<Vec<String>>,
    pub notices: Mutex<Vec<String>>,
}

impl RecordingSurface {
    pub fn last_view(&self) -> Option<HistoryView> {
        self.views.lock().unwrap().last().cloned()
    }

    pub fn last_status(&self) -> Option<String> {
        self.statuses.lock().unwrap().last().cloned()
    }
}

impl RenderSurface for RecordingSurface {
    fn show_history(&self, view: &HistoryView) {
        self.views.lock().unwrap().push(view.clone());
    }

    fn show_status(&self, status: Status) {
        self.statuses.lock().unwrap().push(status.to_string());
    }

    fn show_notice(&self, text: &str) {
        self.notices.lock().unwrap().push(text.to_string());
    }
}

/// Clipboard remembering what was written
#[derive(Default)]
pub struct RecordingClipboard {
    pub fail: bool,
    pub written: Mutex<Vec<String>>,
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::CopyFailed("refused".to_string()));
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Fixed answer to every prompt
pub struct Answer(pub bool);

#[async_trait]
impl Confirm for Answer {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

/// Everything a use case needs, over a function table host
pub struct Rig {
    pub host: FunctionTableBridge,
    pub clipboard: Arc<RecordingClipboard>,
    pub surface: Arc<RecordingSurface>,
    pub bridge: Arc<BridgeResolver>,
    pub writer: HistoryWriter,
    pub screen: Screen,
}

impl Rig {
    pub fn new() -> Self {
        Self::with_clipboard(RecordingClipboard::default())
    }

    pub fn with_clipboard(clipboard: RecordingClipboard) -> Self {
        let host = FunctionTableBridge::new();
        let clipboard = Arc::new(clipboard);
        let surface = Arc::new(RecordingSurface::default());
        let bridge = Arc::new(BridgeResolver::new(
            Arc::new(host.clone()),
            clipboard.clone(),
        ));
        let (writer, reader) = history_store();
        let surfaces = vec![surface.clone() as Arc<dyn RenderSurface>];
        let screen = Screen::new(Renderer::default(), reader, surfaces);

        Self {
            host,
            clipboard,
            surface,
            bridge,
            writer,
            screen,
        }
    }
}
