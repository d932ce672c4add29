//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup,
//! and the monitor and one-shot runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod input;
pub mod logging;
pub mod presenter;

// Re-export commonly used types
pub use app::{MonitorApp, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction};
pub use input::InputCommand;
pub use presenter::Presenter;
