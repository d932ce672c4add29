//! Screen: renderer plus the surfaces it draws on

use std::sync::Arc;

use crate::domain::status::Status;

use super::history_store::HistoryReader;
use super::ports::RenderSurface;
use super::renderer::{HistoryView, Renderer};

/// Redraws the history region and status line on every attached surface
#[derive(Clone)]
pub struct Screen {
    renderer: Renderer,
    reader: HistoryReader,
    surfaces: Vec<Arc<dyn RenderSurface>>,
}

impl Screen {
    /// Create a screen reading `reader` and drawing on `surfaces`
    pub fn new(
        renderer: Renderer,
        reader: HistoryReader,
        surfaces: Vec<Arc<dyn RenderSurface>>,
    ) -> Self {
        Self {
            renderer,
            reader,
            surfaces,
        }
    }

    /// Render the committed list and replace every history region with it
    pub fn redraw(&self) -> HistoryView {
        let view = self.renderer.render(&self.reader.read());
        for surface in &self.surfaces {
            surface.show_history(&view);
        }
        view
    }

    /// Replace every status region
    pub fn status(&self, status: Status) {
        for surface in &self.surfaces {
            surface.show_status(status);
        }
    }

    /// Show informational text on every surface
    pub fn notice(&self, text: &str) {
        for surface in &self.surfaces {
            surface.show_notice(text);
        }
    }

    /// Reader of the committed list
    pub fn reader(&self) -> &HistoryReader {
        &self.reader
    }
}
