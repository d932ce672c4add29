//! History list renderer
//!
//! Projects a [`HistoryList`] into a [`HistoryView`]. Rendering is pure:
//! the same list always yields the same view, and every call produces the
//! whole view. Surfaces replace their container with it wholesale.

use std::fmt::{self, Write as _};

use chrono::{DateTime, FixedOffset, Local, Utc};

use crate::application::ports::HISTORY_CONTAINER_ID;
use crate::domain::config::DEFAULT_TIME_FORMAT;
use crate::domain::entry::{Entry, HistoryList};

/// Longest content shown in a row, in characters
pub const DISPLAY_LIMIT: usize = 200;

/// Appended to content cut at [`DISPLAY_LIMIT`]
pub const ELLIPSIS: &str = "...";

/// Time label for entries without a usable timestamp
pub const INVALID_TIME_LABEL: &str = "Invalid Date";

/// Empty-state headline
pub const EMPTY_TITLE: &str = "No data";

/// Empty-state hint
pub const EMPTY_HINT: &str = "Copy something to get started";

/// What activating a row copies: the row's original content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTrigger {
    pub index: usize,
    pub content: String,
}

/// One visible row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    time_label: String,
    display: String,
    trigger: CopyTrigger,
}

impl RenderedRow {
    /// Position of the row in the list
    pub fn index(&self) -> usize {
        self.trigger.index
    }

    /// Human-readable capture time
    pub fn time_label(&self) -> &str {
        &self.time_label
    }

    /// Display text, possibly truncated, not yet escaped
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Display text escaped for markup surfaces
    pub fn display_html(&self) -> String {
        escape_html(&self.display)
    }

    /// Display text escaped for terminals
    pub fn display_terminal(&self) -> String {
        escape_terminal(&self.display)
    }

    /// Copy trigger bound to the untruncated content
    pub fn trigger(&self) -> &CopyTrigger {
        &self.trigger
    }

    fn to_html(&self) -> String {
        format!(
            "<div class=\"history-item\" data-index=\"{}\"><div class=\"item-time\">{}</div><div class=\"item-content\">{}</div></div>",
            self.index(),
            escape_html(&self.time_label),
            self.display_html()
        )
    }
}

/// The visible history region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryView {
    /// Placeholder shown for an empty list
    Empty,
    /// One row per entry, in list order
    Rows(Vec<RenderedRow>),
}

impl HistoryView {
    /// Whether this is the empty-state placeholder
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Rendered rows; none for the empty state
    pub fn rows(&self) -> &[RenderedRow] {
        match self {
            Self::Empty => &[],
            Self::Rows(rows) => rows,
        }
    }

    /// Container markup, including the container element itself
    pub fn to_html(&self) -> String {
        let mut html = format!("<div id=\"{}\">", HISTORY_CONTAINER_ID);
        match self {
            Self::Empty => {
                let _ = write!(
                    html,
                    "<div class=\"empty-state\"><p>{}</p><p class=\"hint\">{}</p></div>",
                    EMPTY_TITLE, EMPTY_HINT
                );
            }
            Self::Rows(rows) => {
                for row in rows {
                    html.push_str(&row.to_html());
                }
            }
        }
        html.push_str("</div>");
        html
    }
}

/// Zone used for time labels
#[derive(Debug, Clone, Copy)]
enum LabelZone {
    Local,
    Fixed(FixedOffset),
}

/// History renderer
#[derive(Debug, Clone)]
pub struct Renderer {
    time_format: String,
    zone: LabelZone,
}

impl Renderer {
    /// Create a renderer using local time and `time_format`
    pub fn new(time_format: impl Into<String>) -> Self {
        Self {
            time_format: time_format.into(),
            zone: LabelZone::Local,
        }
    }

    /// Create a renderer that labels times in a fixed zone
    pub fn with_offset(time_format: impl Into<String>, offset: FixedOffset) -> Self {
        Self {
            time_format: time_format.into(),
            zone: LabelZone::Fixed(offset),
        }
    }

    /// Project `list` into a view
    pub fn render(&self, list: &HistoryList) -> HistoryView {
        if list.is_empty() {
            return HistoryView::Empty;
        }

        let rows = list
            .iter()
            .enumerate()
            .map(|(index, entry)| self.render_row(index, entry))
            .collect();
        HistoryView::Rows(rows)
    }

    fn render_row(&self, index: usize, entry: &Entry) -> RenderedRow {
        RenderedRow {
            time_label: self.time_label(entry.timestamp()),
            display: truncate_for_display(entry.content()),
            trigger: CopyTrigger {
                index,
                content: entry.content().to_string(),
            },
        }
    }

    /// Format a capture time, or the invalid label when there is none
    pub fn time_label(&self, timestamp: Option<DateTime<Utc>>) -> String {
        let Some(timestamp) = timestamp else {
            return INVALID_TIME_LABEL.to_string();
        };

        // chrono reports bad patterns as a formatting error
        match self.format_in_zone(timestamp, &self.time_format) {
            Ok(label) => label,
            Err(_) => {
                tracing::warn!(format = %self.time_format, "Invalid time format, using default");
                self.format_in_zone(timestamp, DEFAULT_TIME_FORMAT).unwrap_or_default()
            }
        }
    }

    fn format_in_zone(
        &self,
        timestamp: DateTime<Utc>,
        pattern: &str,
    ) -> Result<String, fmt::Error> {
        let mut label = String::new();
        match self.zone {
            LabelZone::Local => {
                write!(label, "{}", timestamp.with_timezone(&Local).format(pattern))?
            }
            LabelZone::Fixed(offset) => {
                write!(label, "{}", timestamp.with_timezone(&offset).format(pattern))?
            }
        }
        Ok(label)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_FORMAT)
    }
}

/// Cut `content` to [`DISPLAY_LIMIT`] characters plus [`ELLIPSIS`]
pub fn truncate_for_display(content: &str) -> String {
    match content.char_indices().nth(DISPLAY_LIMIT) {
        Some((cut, _)) => format!("{}{}", &content[..cut], ELLIPSIS),
        None => content.to_string(),
    }
}

/// Escape markup-significant characters
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Make control characters visible so content cannot drive the terminal
pub fn escape_terminal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            escaped.extend(c.escape_debug());
        } else {
            escaped.push(c);
        }
    }
    escaped
}
