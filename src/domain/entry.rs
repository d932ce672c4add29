//! Clipboard history entries and ingestion of host payloads

use std::ops::Deref;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

/// One recorded clipboard capture.
///
/// Entries are produced once at the ingestion boundary and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    content: String,
    timestamp: Option<DateTime<Utc>>,
}

impl Entry {
    /// Create an entry with a known capture time
    pub fn new(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            content: content.into(),
            timestamp: Some(timestamp),
        }
    }

    /// Create an entry whose capture time could not be determined
    pub fn without_timestamp(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            timestamp: None,
        }
    }

    /// Normalize one element of a host history payload.
    ///
    /// Accepts both `Content`/`content` and `Timestamp`/`timestamp`. The
    /// capitalized spelling wins when both are present and usable.
    /// Missing or unusable fields degrade instead of failing.
    pub fn from_value(value: &Value) -> Self {
        let content = ["Content", "content"]
            .iter()
            .filter_map(|key| value.get(key))
            .filter_map(Value::as_str)
            .find(|s| !s.is_empty())
            .unwrap_or_default()
            .to_string();

        let timestamp = ["Timestamp", "timestamp"]
            .iter()
            .filter_map(|key| value.get(key))
            .find_map(parse_timestamp);

        Self { content, timestamp }
    }

    /// The captured text, untruncated
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Capture time, `None` when the host sent nothing usable
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }
}

/// RFC 3339 strings or epoch milliseconds
fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            DateTime::from_timestamp_millis(millis)
        }
        _ => None,
    }
}

/// Ordered history as provided by the host. Order is never changed here.
///
/// Cloning is cheap; the entries are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryList {
    entries: Arc<[Entry]>,
}

impl HistoryList {
    /// An empty history
    pub fn empty() -> Self {
        Self {
            entries: Arc::from(Vec::new()),
        }
    }

    /// Normalize a raw list-history result.
    ///
    /// Arrays become one entry per element; null and every other shape
    /// become an empty list.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => items.iter().map(Entry::from_value).collect(),
            _ => Self::empty(),
        }
    }

    /// Whether `value` has a shape `from_value` can read entries from
    pub fn is_recognized(value: &Value) -> bool {
        matches!(value, Value::Array(_) | Value::Null)
    }
}

impl Default for HistoryList {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Entry>> for HistoryList {
    fn from(entries: Vec<Entry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }
}

impl FromIterator<Entry> for HistoryList {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Deref for HistoryList {
    type Target = [Entry];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}
