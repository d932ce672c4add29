//! HTTP host bridge adapter
//!
//! Talks to a host service exposing one route per capability. A route the
//! host does not know (404, 405, 501) means the capability is absent.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::application::ports::{BridgeError, Capability, HostBridge};

#[derive(Debug, Serialize)]
struct CopyRequest<'a> {
    content: &'a str,
}

/// Host bridge over HTTP
pub struct HttpBridge {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBridge {
    /// Create a bridge to the host at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a bridge using an existing client
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Route for a capability
    fn url(&self, capability: Capability) -> String {
        let path = match capability {
            Capability::ListHistory => "history",
            Capability::CopyToClipboard => "clipboard",
            Capability::ClearHistory => "clear",
            Capability::GetVersion => "version",
        };
        format!("{}/{}", self.base_url, path)
    }

    /// Send a request and map the reply into a raw host value
    async fn send(
        &self,
        capability: Capability,
        request: reqwest::RequestBuilder,
    ) -> Result<Value, BridgeError> {
        let response = request
            .send()
            .await
            .map_err(|e| BridgeError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(capability = %capability, status = %status, "Host replied");

        if matches!(
            status,
            StatusCode::NOT_FOUND | StatusCode::METHOD_NOT_ALLOWED | StatusCode::NOT_IMPLEMENTED
        ) {
            return Err(BridgeError::Unavailable(capability));
        }

        let text = response
            .text()
            .await
            .map_err(|e| BridgeError::Transport(e.to_string()))?;
        let body = parse_body(&text);

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}: {}", status, text.trim()));
            return Err(BridgeError::Host(message));
        }

        Ok(body)
    }
}

/// Empty body is null, JSON is parsed, anything else is kept as text
fn parse_body(text: &str) -> Value {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string()))
}

#[async_trait]
impl HostBridge for HttpBridge {
    fn supports(&self, _capability: Capability) -> bool {
        // Absence shows up per call as 404/405/501
        true
    }

    async fn list_history(&self) -> Result<Value, BridgeError> {
        let capability = Capability::ListHistory;
        self.send(capability, self.client.get(self.url(capability)))
            .await
    }

    async fn copy_to_clipboard(&self, content: &str) -> Result<Value, BridgeError> {
        let capability = Capability::CopyToClipboard;
        let request = self
            .client
            .post(self.url(capability))
            .json(&CopyRequest { content });
        self.send(capability, request).await
    }

    async fn clear_history(&self) -> Result<Value, BridgeError> {
        let capability = Capability::ClearHistory;
        self.send(capability, self.client.post(self.url(capability)))
            .await
    }

    async fn get_version(&self) -> Result<Value, BridgeError> {
        let capability = Capability::GetVersion;
        self.send(capability, self.client.get(self.url(capability)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trailing_slash_is_trimmed() {
        let bridge = HttpBridge::new("http://localhost:8080/api/");
        assert_eq!(bridge.base_url(), "http://localhost:8080/api");
        assert_eq!(
            bridge.url(Capability::ListHistory),
            "http://localhost:8080/api/history"
        );
    }

    #[test]
    fn routes_per_capability() {
        let bridge = HttpBridge::new("http://host");
        assert_eq!(bridge.url(Capability::CopyToClipboard), "http://host/clipboard");
        assert_eq!(bridge.url(Capability::ClearHistory), "http://host/clear");
        assert_eq!(bridge.url(Capability::GetVersion), "http://host/version");
    }

    #[test]
    fn parse_body_shapes() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("  \n"), Value::Null);
        assert_eq!(parse_body("[1,2]"), json!([1, 2]));
        assert_eq!(parse_body("\"v1\""), json!("v1"));
        assert_eq!(parse_body("Host v2"), json!("Host v2"));
    }
}
