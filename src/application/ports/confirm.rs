//! User confirmation port interface

use async_trait::async_trait;

/// Port for a yes/no prompt
#[async_trait]
pub trait Confirm: Send + Sync {
    /// Ask `prompt`; true only on an explicit yes
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Confirms everything without asking
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

#[async_trait]
impl Confirm for AssumeYes {
    async fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
