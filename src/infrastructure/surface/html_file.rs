//! HTML file mirror of the history and status regions
//!
//! Keeps a page on disk with the same container and status ids a webview
//! front end uses, rewritten after every update.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use crate::application::ports::{RenderSurface, STATUS_REGION_ID};
use crate::application::renderer::{escape_html, HistoryView};
use crate::domain::status::Status;

#[derive(Debug, Default)]
struct Page {
    container: String,
    status: String,
    notice: Option<String>,
}

/// Surface writing an HTML page to `path`
pub struct HtmlFileSurface {
    path: PathBuf,
    page: Mutex<Page>,
}

impl HtmlFileSurface {
    /// Create a surface writing to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            page: Mutex::new(Page {
                container: HistoryView::Empty.to_html(),
                ..Default::default()
            }),
        }
    }

    /// Page location
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn update(&self, change: impl FnOnce(&mut Page)) {
        let mut page = self.page.lock().unwrap_or_else(|e| e.into_inner());
        change(&mut page);

        if let Err(e) = fs::write(&self.path, document(&page)) {
            warn!(path = %self.path.display(), error = %e, "Failed to write HTML page");
        }
    }
}

impl RenderSurface for HtmlFileSurface {
    fn show_history(&self, view: &HistoryView) {
        let container = view.to_html();
        self.update(|page| page.container = container);
    }

    fn show_status(&self, status: Status) {
        let status = escape_html(status.as_str());
        self.update(|page| page.status = status);
    }

    fn show_notice(&self, text: &str) {
        let notice = escape_html(text);
        self.update(|page| page.notice = Some(notice));
    }
}

fn document(page: &Page) -> String {
    let notice = page
        .notice
        .as_ref()
        .map(|n| format!("<pre class=\"notice\">{}</pre>\n", n))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Clipboard Monitor</title>\n</head>\n<body>\n<div id=\"{}\">{}</div>\n{}\n{}</body>\n</html>\n",
        STATUS_REGION_ID, page.status, page.container, notice
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::renderer::Renderer;
    use crate::domain::entry::{Entry, HistoryList};

    #[test]
    fn writes_container_and_status() {
        let dir = tempfile::tempdir().unwrap();
        let surface = HtmlFileSurface::new(dir.path().join("index.html"));

        let list: HistoryList = vec![Entry::without_timestamp("<b>bold</b>")].into();
        surface.show_history(&Renderer::default().render(&list));
        surface.show_status(Status::ListUpdated);

        let html = fs::read_to_string(surface.path()).unwrap();
        assert!(html.contains("<div id=\"historyContainer\">"));
        assert!(html.contains("<div id=\"status\">list updated</div>"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn empty_view_replaces_rows() {
        let dir = tempfile::tempdir().unwrap();
        let surface = HtmlFileSurface::new(dir.path().join("index.html"));

        let list: HistoryList = vec![Entry::without_timestamp("gone soon")].into();
        surface.show_history(&Renderer::default().render(&list));
        surface.show_history(&HistoryView::Empty);

        let html = fs::read_to_string(surface.path()).unwrap();
        assert!(html.contains("empty-state"));
        assert!(!html.contains("gone soon"));
    }
}
