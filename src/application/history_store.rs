//! Process-wide history store
//!
//! A single committed [`HistoryList`] shared between one writer role and
//! any number of readers. The list is always replaced whole.

use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::entry::{Entry, HistoryList};

/// Create a store holding an empty list
pub fn history_store() -> (HistoryWriter, HistoryReader) {
    let (tx, rx) = watch::channel(HistoryList::empty());
    (HistoryWriter { tx: Arc::new(tx) }, HistoryReader { rx })
}

/// Write access to the store.
///
/// Held only by the refresh loop and the clear handler.
#[derive(Debug, Clone)]
pub struct HistoryWriter {
    tx: Arc<watch::Sender<HistoryList>>,
}

impl HistoryWriter {
    /// Commit `list`, replacing whatever was there
    pub fn replace(&self, list: HistoryList) {
        self.tx.send_replace(list);
    }

    /// Commit an empty list
    pub fn reset(&self) {
        self.replace(HistoryList::empty());
    }

    /// A new reader of this store
    pub fn reader(&self) -> HistoryReader {
        HistoryReader {
            rx: self.tx.subscribe(),
        }
    }
}

/// Read access to the store
#[derive(Debug, Clone)]
pub struct HistoryReader {
    rx: watch::Receiver<HistoryList>,
}

impl HistoryReader {
    /// The most recently committed list
    pub fn read(&self) -> HistoryList {
        self.rx.borrow().clone()
    }

    /// Entry at `index` in the committed list
    pub fn get(&self, index: usize) -> Option<Entry> {
        self.rx.borrow().get(index).cloned()
    }

    /// Wait until the writer commits a new list
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
