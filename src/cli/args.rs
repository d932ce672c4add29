//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// Clipboard Monitor - live view of a host's clipboard history
#[derive(Parser, Debug)]
#[command(name = "clip-monitor")]
#[command(version)]
#[command(about = "Live view of clipboard history, with copy-back and clear")]
#[command(long_about = None)]
pub struct Cli {
    /// Host base URL (e.g., http://127.0.0.1:8731)
    #[arg(long, value_name = "URL")]
    pub host: Option<String>,

    /// Refresh interval in milliseconds
    #[arg(short = 'i', long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Mirror the history view into an HTML file
    #[arg(long, value_name = "PATH")]
    pub html: Option<String>,

    /// Clipboard tool for direct copies (arboard, wl-copy)
    #[arg(long, value_name = "TOOL")]
    pub clipboard_tool: Option<String>,

    /// Clear without asking for confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch history once and print it
    List,
    /// Copy text to the clipboard through the host
    Copy {
        /// Text to copy
        text: String,
    },
    /// Clear host history
    Clear,
    /// Show version and features
    About,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "host_url",
    "refresh_interval_ms",
    "clipboard_tool",
    "time_format",
    "html_output",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
