//! Host bridge port interface

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use super::clipboard::ClipboardError;

/// One named operation a host may expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ListHistory,
    CopyToClipboard,
    ClearHistory,
    GetVersion,
}

impl Capability {
    /// Every capability, in a stable order
    pub const ALL: [Capability; 4] = [
        Capability::ListHistory,
        Capability::CopyToClipboard,
        Capability::ClearHistory,
        Capability::GetVersion,
    ];

    /// Name of the callable in the host namespace
    pub const fn host_name(&self) -> &'static str {
        match self {
            Self::ListHistory => "getHistory",
            Self::CopyToClipboard => "copyToClipboardGo",
            Self::ClearHistory => "clearHistory",
            Self::GetVersion => "getVersionInfo",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ListHistory => "list-history",
            Self::CopyToClipboard => "copy-to-clipboard",
            Self::ClearHistory => "clear-history",
            Self::GetVersion => "get-version",
        };
        write!(f, "{}", name)
    }
}

/// Bridge errors
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The capability is not present. A degraded mode, not a failure.
    #[error("{0} is not available on this host")]
    Unavailable(Capability),

    #[error("Host reported an error: {0}")]
    Host(String),

    #[error("Host call failed: {0}")]
    Transport(String),

    #[error("Host returned a malformed result: {0}")]
    Malformed(String),

    #[error("Clipboard fallback failed: {0}")]
    Fallback(#[from] ClipboardError),
}

impl BridgeError {
    /// Whether this error only means "capability not present"
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Port for calling into the host that records clipboard history.
///
/// `supports` is checked before every call; hosts may gain capabilities
/// after startup, so callers must not cache it. Invoke methods return the
/// raw host value; shape checks happen in the resolver.
#[async_trait]
pub trait HostBridge: Send + Sync {
    /// Whether the host currently exposes `capability`
    fn supports(&self, capability: Capability) -> bool;

    /// Fetch the recorded history
    async fn list_history(&self) -> Result<Value, BridgeError>;

    /// Ask the host to write `content` to the system clipboard
    async fn copy_to_clipboard(&self, content: &str) -> Result<Value, BridgeError>;

    /// Ask the host to drop its history
    async fn clear_history(&self) -> Result<Value, BridgeError>;

    /// Describe the running host build
    async fn get_version(&self) -> Result<Value, BridgeError>;
}

/// Blanket implementation for boxed bridge types
#[async_trait]
impl HostBridge for Box<dyn HostBridge> {
    fn supports(&self, capability: Capability) -> bool {
        self.as_ref().supports(capability)
    }

    async fn list_history(&self) -> Result<Value, BridgeError> {
        self.as_ref().list_history().await
    }

    async fn copy_to_clipboard(&self, content: &str) -> Result<Value, BridgeError> {
        self.as_ref().copy_to_clipboard(content).await
    }

    async fn clear_history(&self) -> Result<Value, BridgeError> {
        self.as_ref().clear_history().await
    }

    async fn get_version(&self) -> Result<Value, BridgeError> {
        self.as_ref().get_version().await
    }
}
