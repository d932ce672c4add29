//! Application configuration value object

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fixed refresh cadence unless configured otherwise
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 2000;

/// 24-hour clock time of day
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Clipboard tool used when the host cannot copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardTool {
    /// Cross-platform arboard library
    #[default]
    Arboard,
    /// Wayland `wl-copy`
    WlCopy,
}

impl fmt::Display for ClipboardTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardTool::Arboard => write!(f, "arboard"),
            ClipboardTool::WlCopy => write!(f, "wl-copy"),
        }
    }
}

/// Error type for parsing a clipboard tool name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clipboard tool '{value}'. Valid options: arboard, wl-copy")]
pub struct ParseClipboardToolError {
    pub value: String,
}

impl FromStr for ClipboardTool {
    type Err = ParseClipboardToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "arboard" => Ok(ClipboardTool::Arboard),
            "wl-copy" | "wayland" => Ok(ClipboardTool::WlCopy),
            _ => Err(ParseClipboardToolError {
                value: s.to_string(),
            }),
        }
    }
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub host_url: Option<String>,
    pub refresh_interval_ms: Option<u64>,
    pub clipboard_tool: Option<String>,
    pub time_format: Option<String>,
    pub html_output: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            host_url: None,
            refresh_interval_ms: Some(DEFAULT_REFRESH_INTERVAL_MS),
            clipboard_tool: Some(ClipboardTool::default().to_string()),
            time_format: Some(DEFAULT_TIME_FORMAT.to_string()),
            html_output: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            host_url: other.host_url.or(self.host_url),
            refresh_interval_ms: other.refresh_interval_ms.or(self.refresh_interval_ms),
            clipboard_tool: other.clipboard_tool.or(self.clipboard_tool),
            time_format: other.time_format.or(self.time_format),
            html_output: other.html_output.or(self.html_output),
        }
    }

    /// Host base URL, `None` when no host is configured
    pub fn host_url(&self) -> Option<&str> {
        self.host_url.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Refresh interval, or the default when unset or zero
    pub fn refresh_interval_or_default(&self) -> Duration {
        let ms = self
            .refresh_interval_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_REFRESH_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    /// Clipboard tool, or arboard if not set/invalid
    pub fn clipboard_tool_or_default(&self) -> ClipboardTool {
        self.clipboard_tool
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Time label pattern, or 24-hour `%H:%M:%S` if not set
    pub fn time_format_or_default(&self) -> &str {
        self.time_format
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_TIME_FORMAT)
    }

    /// HTML mirror path, if configured
    pub fn html_output(&self) -> Option<PathBuf> {
        self.html_output
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.host_url.is_none());
        assert_eq!(config.refresh_interval_ms, Some(2000));
        assert_eq!(config.clipboard_tool, Some("arboard".to_string()));
        assert_eq!(config.time_format, Some("%H:%M:%S".to_string()));
        assert!(config.html_output.is_none());
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.host_url.is_none());
        assert!(config.refresh_interval_ms.is_none());
        assert!(config.clipboard_tool.is_none());
        assert!(config.time_format.is_none());
        assert!(config.html_output.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            host_url: Some("http://base".to_string()),
            refresh_interval_ms: Some(2000),
            ..Default::default()
        };

        let other = AppConfig {
            host_url: Some("http://other".to_string()),
            refresh_interval_ms: None, // Should not override
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.host_url(), Some("http://other"));
        assert_eq!(merged.refresh_interval_ms, Some(2000)); // Kept from base
    }

    #[test]
    fn blank_host_url_counts_as_unset() {
        let config = AppConfig {
            host_url: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.host_url().is_none());
    }

    #[test]
    fn refresh_interval_defaults() {
        assert_eq!(
            AppConfig::empty().refresh_interval_or_default(),
            Duration::from_millis(2000)
        );
        let zero = AppConfig {
            refresh_interval_ms: Some(0),
            ..Default::default()
        };
        assert_eq!(zero.refresh_interval_or_default(), Duration::from_millis(2000));
        let custom = AppConfig {
            refresh_interval_ms: Some(500),
            ..Default::default()
        };
        assert_eq!(custom.refresh_interval_or_default(), Duration::from_millis(500));
    }

    #[test]
    fn clipboard_tool_parses() {
        let config = AppConfig {
            clipboard_tool: Some("wl-copy".to_string()),
            ..Default::default()
        };
        assert_eq!(config.clipboard_tool_or_default(), ClipboardTool::WlCopy);
    }

    #[test]
    fn clipboard_tool_uses_default_on_invalid() {
        let config = AppConfig {
            clipboard_tool: Some("pbcopy".to_string()),
            ..Default::default()
        };
        assert_eq!(config.clipboard_tool_or_default(), ClipboardTool::Arboard);
    }

    #[test]
    fn clipboard_tool_round_trips_through_display() {
        for tool in [ClipboardTool::Arboard, ClipboardTool::WlCopy] {
            assert_eq!(tool.to_string().parse::<ClipboardTool>(), Ok(tool));
        }
    }

    #[test]
    fn time_format_or_default() {
        assert_eq!(AppConfig::empty().time_format_or_default(), "%H:%M:%S");
        let config = AppConfig {
            time_format: Some("%H:%M".to_string()),
            ..Default::default()
        };
        assert_eq!(config.time_format_or_default(), "%H:%M");
    }

    #[test]
    fn html_output_path() {
        assert!(AppConfig::empty().html_output().is_none());
        let config = AppConfig {
            html_output: Some("/tmp/history.html".to_string()),
            ..Default::default()
        };
        assert_eq!(config.html_output(), Some(PathBuf::from("/tmp/history.html")));
    }
}
