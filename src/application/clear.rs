//! Clear-history use case

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::status::Status;

use super::bridge_resolver::BridgeResolver;
use super::history_store::HistoryWriter;
use super::ports::Confirm;
use super::screen::Screen;

/// Fixed confirmation prompt
pub const CLEAR_PROMPT: &str = "Really clear all history?";

/// Outcome of a clear action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Host call succeeded or the host has no clear capability
    Cleared,
    /// Host call failed; the local view was cleared anyway
    Failed,
    /// Declined at the prompt; nothing changed
    Aborted,
}

/// Clears host history after an explicit confirmation.
///
/// The local store is reset whether or not the host call succeeded.
pub struct ClearHandler {
    bridge: Arc<BridgeResolver>,
    writer: HistoryWriter,
    screen: Screen,
    confirm: Arc<dyn Confirm>,
}

impl ClearHandler {
    /// Create a clear handler
    pub fn new(
        bridge: Arc<BridgeResolver>,
        writer: HistoryWriter,
        screen: Screen,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        Self {
            bridge,
            writer,
            screen,
            confirm,
        }
    }

    /// Ask, then clear
    pub async fn clear(&self) -> ClearOutcome {
        if !self.confirm.confirm(CLEAR_PROMPT).await {
            info!("Clear declined");
            return ClearOutcome::Aborted;
        }

        let result = self.bridge.clear_history().await;

        self.writer.reset();
        self.screen.redraw();

        match result {
            Ok(_) => {
                self.screen.status(Status::DataCleared);
                ClearOutcome::Cleared
            }
            Err(e) => {
                error!(error = %e, "Clear failed");
                self.screen.status(Status::ClearFailed);
                ClearOutcome::Failed
            }
        }
    }
}
