//! Host bridge infrastructure module
//!
//! Provides the in-process function table, the HTTP host adapter and the
//! null bridge used when no host runtime exists.

mod function_table;
mod http;
mod null;

pub use function_table::{FunctionTableBridge, HostFunction, HostReturn};
pub use http::HttpBridge;
pub use null::NullBridge;

use std::sync::Arc;

use crate::application::ports::HostBridge;
use crate::domain::config::AppConfig;

/// Create the bridge for `config`: HTTP when a host URL is set, null otherwise
pub fn create_bridge(config: &AppConfig) -> Arc<dyn HostBridge> {
    match config.host_url() {
        Some(url) => Arc::new(HttpBridge::new(url)),
        None => Arc::new(NullBridge::new()),
    }
}
