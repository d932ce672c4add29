//! Bridge resolver
//!
//! Gives callers one awaited call per capability, whatever backs it. The
//! host probe runs before every call. An absent capability resolves to
//! [`Resolved::Unavailable`], except copy-to-clipboard, which falls back to
//! a direct clipboard write.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::domain::entry::HistoryList;

use super::ports::{BridgeError, Capability, Clipboard, HostBridge};

/// Outcome of a resolved capability call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<T> {
    /// The host handled the call
    Host(T),
    /// The host lacked the capability; the built-in equivalent handled it
    Fallback(T),
    /// The host lacked the capability and nothing stands in for it
    Unavailable,
}

impl<T> Resolved<T> {
    /// The produced value, if any
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Host(value) | Self::Fallback(value) => Some(value),
            Self::Unavailable => None,
        }
    }

    /// Whether the capability was missing with no stand-in
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

/// Uniform call surface over a host bridge and the clipboard fallback
pub struct BridgeResolver {
    host: Arc<dyn HostBridge>,
    fallback: Arc<dyn Clipboard>,
}

impl BridgeResolver {
    /// Create a resolver over `host`, copying through `fallback` when needed
    pub fn new(host: Arc<dyn HostBridge>, fallback: Arc<dyn Clipboard>) -> Self {
        Self { host, fallback }
    }

    /// Whether the host exposes `capability` right now
    pub fn is_available(&self, capability: Capability) -> bool {
        self.host.supports(capability)
    }

    /// List history, normalized.
    ///
    /// Absent capability, null and unrecognized shapes all yield an empty
    /// list; only host failures are errors.
    pub async fn list_history(&self) -> Result<Resolved<HistoryList>, BridgeError> {
        if !self.is_available(Capability::ListHistory) {
            debug!(capability = %Capability::ListHistory, "Capability not available");
            return Ok(Resolved::Unavailable);
        }

        let value = match self.host.list_history().await {
            Ok(value) => value,
            Err(e) if e.is_unavailable() => return Ok(Resolved::Unavailable),
            Err(e) => return Err(e),
        };
        check_error_payload(&value)?;

        if !HistoryList::is_recognized(&value) {
            debug!(kind = value_kind(&value), "Unrecognized history result, treating as empty");
        }
        Ok(Resolved::Host(HistoryList::from_value(&value)))
    }

    /// Write `content` to the system clipboard through the host, or directly
    pub async fn copy_to_clipboard(&self, content: &str) -> Result<Resolved<()>, BridgeError> {
        if self.is_available(Capability::CopyToClipboard) {
            match self.host.copy_to_clipboard(content).await {
                Ok(value) => {
                    check_error_payload(&value)?;
                    return Ok(Resolved::Host(()));
                }
                Err(e) if e.is_unavailable() => {}
                Err(e) => return Err(e),
            }
        }

        debug!("Host cannot copy, writing clipboard directly");
        self.fallback.copy(content).await?;
        Ok(Resolved::Fallback(()))
    }

    /// Ask the host to clear its history
    pub async fn clear_history(&self) -> Result<Resolved<()>, BridgeError> {
        if !self.is_available(Capability::ClearHistory) {
            debug!(capability = %Capability::ClearHistory, "Capability not available");
            return Ok(Resolved::Unavailable);
        }

        match self.host.clear_history().await {
            Ok(value) => {
                check_error_payload(&value)?;
                Ok(Resolved::Host(()))
            }
            Err(e) if e.is_unavailable() => Ok(Resolved::Unavailable),
            Err(e) => Err(e),
        }
    }

    /// Host build description
    pub async fn get_version(&self) -> Result<Resolved<String>, BridgeError> {
        if !self.is_available(Capability::GetVersion) {
            return Ok(Resolved::Unavailable);
        }

        let value = match self.host.get_version().await {
            Ok(value) => value,
            Err(e) if e.is_unavailable() => return Ok(Resolved::Unavailable),
            Err(e) => return Err(e),
        };
        check_error_payload(&value)?;

        match value {
            Value::String(version) => Ok(Resolved::Host(version)),
            other => Err(BridgeError::Malformed(format!(
                "expected a version string, got {}",
                value_kind(&other)
            ))),
        }
    }
}

/// Raise an object carrying a non-empty `error` field as a host error
fn check_error_payload(value: &Value) -> Result<(), BridgeError> {
    let Some(error) = value.get("error") else {
        return Ok(());
    };

    match error {
        Value::Null | Value::Bool(false) => Ok(()),
        Value::String(s) if s.is_empty() => Ok(()),
        Value::String(s) => Err(BridgeError::Host(s.clone())),
        other => Err(BridgeError::Host(other.to_string())),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
