//! Bridge used when no host runtime is present

use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::{BridgeError, Capability, HostBridge};

/// Host bridge that exposes no capabilities
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBridge;

impl NullBridge {
    /// Create a new null bridge
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostBridge for NullBridge {
    fn supports(&self, _capability: Capability) -> bool {
        false
    }

    async fn list_history(&self) -> Result<Value, BridgeError> {
        Err(BridgeError::Unavailable(Capability::ListHistory))
    }

    async fn copy_to_clipboard(&self, _content: &str) -> Result<Value, BridgeError> {
        Err(BridgeError::Unavailable(Capability::CopyToClipboard))
    }

    async fn clear_history(&self) -> Result<Value, BridgeError> {
        Err(BridgeError::Unavailable(Capability::ClearHistory))
    }

    async fn get_version(&self) -> Result<Value, BridgeError> {
        Err(BridgeError::Unavailable(Capability::GetVersion))
    }
}
