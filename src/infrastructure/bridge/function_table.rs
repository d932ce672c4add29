//! In-process host function table
//!
//! Hosts bind callables under their capability names at any time. A call
//! looks the name up when it happens, so functions bound after startup are
//! picked up by the next call.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::Value;

use crate::application::ports::{BridgeError, Capability, HostBridge};

/// What a host function hands back: a value now, or one later.
///
/// `Err` carries the message of an error the host raised.
pub enum HostReturn {
    Ready(Result<Value, String>),
    Pending(BoxFuture<'static, Result<Value, String>>),
}

impl HostReturn {
    /// An immediate value
    pub fn ready(value: Value) -> Self {
        Self::Ready(Ok(value))
    }

    /// A value that arrives when `future` completes
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = Result<Value, String>> + Send + 'static,
    {
        Self::Pending(future.boxed())
    }

    /// An error raised by the host
    pub fn raise(message: impl Into<String>) -> Self {
        Self::Ready(Err(message.into()))
    }

    /// Await the value, whichever shape it came in
    pub async fn settle(self) -> Result<Value, String> {
        match self {
            Self::Ready(result) => result,
            Self::Pending(future) => future.await,
        }
    }
}

/// A bound host callable
pub type HostFunction = Arc<dyn Fn(Vec<Value>) -> HostReturn + Send + Sync>;

/// Host bridge over a table of named functions
#[derive(Clone, Default)]
pub struct FunctionTableBridge {
    functions: Arc<RwLock<HashMap<String, HostFunction>>>,
}

impl FunctionTableBridge {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `function` under `name`, replacing any previous binding
    pub fn bind<F>(&self, name: impl Into<String>, function: F)
    where
        F: Fn(Vec<Value>) -> HostReturn + Send + Sync + 'static,
    {
        let mut functions = self.functions.write().unwrap_or_else(|e| e.into_inner());
        functions.insert(name.into(), Arc::new(function));
    }

    /// Bind `function` under the host name of `capability`
    pub fn bind_capability<F>(&self, capability: Capability, function: F)
    where
        F: Fn(Vec<Value>) -> HostReturn + Send + Sync + 'static,
    {
        self.bind(capability.host_name(), function);
    }

    /// Remove the binding for `name`
    pub fn unbind(&self, name: &str) {
        let mut functions = self.functions.write().unwrap_or_else(|e| e.into_inner());
        functions.remove(name);
    }

    /// Whether a callable named `name` is bound
    pub fn is_bound(&self, name: &str) -> bool {
        let functions = self.functions.read().unwrap_or_else(|e| e.into_inner());
        functions.contains_key(name)
    }

    fn lookup(&self, capability: Capability) -> Option<HostFunction> {
        let functions = self.functions.read().unwrap_or_else(|e| e.into_inner());
        functions.get(capability.host_name()).cloned()
    }

    async fn call(&self, capability: Capability, args: Vec<Value>) -> Result<Value, BridgeError> {
        // Lock is released before the function runs
        let function = self
            .lookup(capability)
            .ok_or(BridgeError::Unavailable(capability))?;

        function(args).settle().await.map_err(BridgeError::Host)
    }
}

#[async_trait]
impl HostBridge for FunctionTableBridge {
    fn supports(&self, capability: Capability) -> bool {
        self.is_bound(capability.host_name())
    }

    async fn list_history(&self) -> Result<Value, BridgeError> {
        self.call(Capability::ListHistory, Vec::new()).await
    }

    async fn copy_to_clipboard(&self, content: &str) -> Result<Value, BridgeError> {
        self.call(
            Capability::CopyToClipboard,
            vec![Value::String(content.to_string())],
        )
        .await
    }

    async fn clear_history(&self) -> Result<Value, BridgeError> {
        self.call(Capability::ClearHistory, Vec::new()).await
    }

    async fn get_version(&self) -> Result<Value, BridgeError> {
        self.call(Capability::GetVersion, Vec::new()).await
    }
}
