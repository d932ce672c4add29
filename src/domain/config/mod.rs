//! Configuration domain module

mod app_config;

pub use app_config::{AppConfig, ClipboardTool, DEFAULT_REFRESH_INTERVAL_MS, DEFAULT_TIME_FORMAT};
