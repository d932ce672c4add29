//! Rendering surface port interface

use crate::application::renderer::HistoryView;
use crate::domain::status::Status;

/// Stable id of the history container region
pub const HISTORY_CONTAINER_ID: &str = "historyContainer";

/// Stable id of the status region
pub const STATUS_REGION_ID: &str = "status";

/// Port for whatever displays the history list and status line.
///
/// Each call replaces the whole region it targets.
pub trait RenderSurface: Send + Sync {
    /// Replace the history container with `view`
    fn show_history(&self, view: &HistoryView);

    /// Replace the status region with the phrase for `status`
    fn show_status(&self, status: Status);

    /// Show informational text, such as the about view
    fn show_notice(&self, text: &str);
}
