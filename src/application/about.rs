//! About view use case

use std::sync::Arc;

use tracing::debug;

use super::bridge_resolver::{BridgeResolver, Resolved};
use super::screen::Screen;

/// Shown when the host cannot describe itself
pub fn default_version() -> String {
    format!("Clipboard Monitor v{}", env!("CARGO_PKG_VERSION"))
}

/// Feature list appended to the version line
pub const FEATURES: &[&str] = &[
    "Live history refresh",
    "History list view",
    "Copy an entry back by activating its row",
    "Clear history",
];

/// Builds the informational about text
pub struct AboutHandler {
    bridge: Arc<BridgeResolver>,
    screen: Screen,
}

impl AboutHandler {
    /// Create an about handler showing its text on `screen`
    pub fn new(bridge: Arc<BridgeResolver>, screen: Screen) -> Self {
        Self { bridge, screen }
    }

    /// Version line from the host, or the built-in one
    pub async fn version(&self) -> String {
        match self.bridge.get_version().await {
            Ok(Resolved::Host(version)) if !version.trim().is_empty() => version,
            Ok(_) => default_version(),
            Err(e) => {
                debug!(error = %e, "Version lookup failed");
                default_version()
            }
        }
    }

    /// Full about text. Never fails.
    pub async fn about(&self) -> String {
        let mut text = self.version().await;
        text.push_str("\n\nFeatures:");
        for feature in FEATURES {
            text.push_str("\n- ");
            text.push_str(feature);
        }

        self.screen.notice(&text);
        text
    }
}
