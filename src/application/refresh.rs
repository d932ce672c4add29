//! Refresh loop use case

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, warn};

use crate::domain::refresh::{RefreshSession, RefreshState};
use crate::domain::status::Status;

use super::bridge_resolver::BridgeResolver;
use super::history_store::HistoryWriter;
use super::screen::Screen;

/// Outcome of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The store now holds this many entries
    Updated(usize),
    /// The fetch failed; the store was reset
    Failed,
}

/// Pulls history from the host and redraws.
///
/// Ticks are independent. Overlapping ticks are not serialized; whichever
/// finishes last decides what the store holds.
pub struct RefreshLoop {
    bridge: Arc<BridgeResolver>,
    writer: HistoryWriter,
    screen: Screen,
    session: Mutex<RefreshSession>,
}

impl RefreshLoop {
    /// Create a refresh loop
    pub fn new(bridge: Arc<BridgeResolver>, writer: HistoryWriter, screen: Screen) -> Self {
        Self {
            bridge,
            writer,
            screen,
            session: Mutex::new(RefreshSession::new()),
        }
    }

    /// Get current refresh state
    pub fn state(&self) -> RefreshState {
        self.lock_session().state()
    }

    /// Run one fetch-normalize-store-render cycle. Never fails.
    pub async fn tick(&self) -> RefreshOutcome {
        let fetch = InFlight::begin(&self.session);
        let result = self.bridge.list_history().await;
        drop(fetch);

        match result {
            Ok(resolved) => {
                let list = resolved.into_value().unwrap_or_default();
                let count = list.len();
                debug!(entries = count, "History fetched");
                self.writer.replace(list);
                self.screen.redraw();
                self.screen.status(Status::ListUpdated);
                RefreshOutcome::Updated(count)
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch history");
                self.writer.reset();
                self.screen.redraw();
                self.screen.status(Status::FetchFailed);
                RefreshOutcome::Failed
            }
        }
    }

    /// Tick now, then every `period` until the task is aborted.
    ///
    /// Each tick runs as its own task, so a slow host delays nothing.
    pub fn spawn(self: Arc<Self>, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut timer = interval(period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                // First tick completes immediately
                timer.tick().await;
                let this = Arc::clone(&self);
                tokio::spawn(async move {
                    this.tick().await;
                });
            }
        })
    }

    fn lock_session(&self) -> MutexGuard<'_, RefreshSession> {
        lock(&self.session)
    }
}

/// One fetch counted in the session until dropped, even if the tick is cancelled
struct InFlight<'a> {
    session: &'a Mutex<RefreshSession>,
}

impl<'a> InFlight<'a> {
    fn begin(session: &'a Mutex<RefreshSession>) -> Self {
        lock(session).begin_fetch();
        Self { session }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        lock(self.session).finish_fetch();
    }
}

fn lock(session: &Mutex<RefreshSession>) -> MutexGuard<'_, RefreshSession> {
    // Held only for a counter update
    session.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::Capability;
    use crate::application::testing::Rig;
    use crate::infrastructure::HostReturn;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::oneshot;

    fn refresh_loop(rig: &Rig) -> Arc<RefreshLoop> {
        Arc::new(RefreshLoop::new(
            Arc::clone(&rig.bridge),
            rig.writer.clone(),
            rig.screen.clone(),
        ))
    }

    #[tokio::test]
    async fn tick_stores_and_renders() {
        let rig = Rig::new();
        rig.host.bind_capability(Capability::ListHistory, |_| {
            HostReturn::ready(json!([
                { "Content": "hello", "Timestamp": "2024-05-01T09:05:00Z" },
                { "content": "world" }
            ]))
        });

        let outcome = refresh_loop(&rig).tick().await;

        assert_eq!(outcome, RefreshOutcome::Updated(2));
        assert_eq!(rig.screen.reader().read().len(), 2);
        let view = rig.surface.last_view().unwrap();
        assert_eq!(view.rows()[0].display(), "hello");
        assert_eq!(rig.surface.last_status().as_deref(), Some("list updated"));
    }

    #[tokio::test]
    async fn failed_fetch_resets_and_reports() {
        let rig = Rig::new();
        rig.writer
            .replace(vec![crate::domain::Entry::without_timestamp("stale")].into());
        rig.host
            .bind_capability(Capability::ListHistory, |_| HostReturn::raise("host crashed"));

        let outcome = refresh_loop(&rig).tick().await;

        assert_eq!(outcome, RefreshOutcome::Failed);
        assert!(rig.screen.reader().read().is_empty());
        assert!(rig.surface.last_view().unwrap().is_empty());
        assert_eq!(
            rig.surface.last_status().as_deref(),
            Some("failed to fetch history")
        );
    }

    #[tokio::test]
    async fn missing_host_is_silent_empty_update() {
        let rig = Rig::new();

        let outcome = refresh_loop(&rig).tick().await;

        assert_eq!(outcome, RefreshOutcome::Updated(0));
        assert!(rig.surface.last_view().unwrap().is_empty());
        assert_eq!(rig.surface.last_status().as_deref(), Some("list updated"));
    }

    #[tokio::test]
    async fn null_result_is_empty_update() {
        let rig = Rig::new();
        rig.host
            .bind_capability(Capability::ListHistory, |_| HostReturn::ready(json!(null)));

        assert_eq!(refresh_loop(&rig).tick().await, RefreshOutcome::Updated(0));
        assert_eq!(rig.surface.last_status().as_deref(), Some("list updated"));
    }

    #[tokio::test]
    async fn state_returns_to_idle_after_tick() {
        let rig = Rig::new();
        let refresh = refresh_loop(&rig);
        refresh.tick().await;
        assert_eq!(refresh.state(), RefreshState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn spawn_ticks_once_per_period() {
        let rig = Rig::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        rig.host.bind_capability(Capability::ListHistory, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            HostReturn::ready(json!([]))
        });

        let handle = refresh_loop(&rig).spawn(Duration::from_millis(2000));

        // Immediate first tick
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_millis(4000)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        handle.abort();
    }

    #[tokio::test]
    async fn later_tick_replaces_earlier_result() {
        let rig = Rig::new();
        let refresh = refresh_loop(&rig);

        rig.host.bind_capability(Capability::ListHistory, |_| {
            HostReturn::ready(json!([{ "content": "a" }, { "content": "b" }]))
        });
        refresh.tick().await;

        rig.host.bind_capability(Capability::ListHistory, |_| {
            HostReturn::ready(json!([{ "content": "c" }]))
        });
        refresh.tick().await;

        let list = rig.screen.reader().read();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].content(), "c");
    }

    #[tokio::test]
    async fn last_tick_to_complete_wins() {
        let rig = Rig::new();
        let refresh = refresh_loop(&rig);
        let (release, gate) = oneshot::channel::<()>();
        let gate = Arc::new(Mutex::new(Some(gate)));
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        rig.host.bind_capability(Capability::ListHistory, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            match gate.lock().unwrap().take() {
                Some(gate) => HostReturn::pending(async move {
                    let _ = gate.await;
                    Ok(json!([{ "content": "slow" }]))
                }),
                None => HostReturn::ready(json!([{ "content": "fast" }])),
            }
        });

        let slow = {
            let refresh = Arc::clone(&refresh);
            tokio::spawn(async move { refresh.tick().await })
        };
        while calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        assert_eq!(refresh.state(), RefreshState::Fetching);

        // Started second, finishes first
        assert_eq!(refresh.tick().await, RefreshOutcome::Updated(1));
        assert_eq!(rig.screen.reader().read()[0].content(), "fast");
        assert_eq!(refresh.state(), RefreshState::Fetching);

        release.send(()).unwrap();
        assert_eq!(slow.await.unwrap(), RefreshOutcome::Updated(1));

        let list = rig.screen.reader().read();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].content(), "slow");
        assert_eq!(refresh.state(), RefreshState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_tick_returns_to_idle() {
        let rig = Rig::new();
        let refresh = refresh_loop(&rig);
        rig.host.bind_capability(Capability::ListHistory, |_| {
            HostReturn::pending(std::future::pending::<Result<serde_json::Value, String>>())
        });

        let cancelled = tokio::time::timeout(Duration::from_millis(50), refresh.tick()).await;

        assert!(cancelled.is_err());
        assert_eq!(refresh.state(), RefreshState::Idle);
    }
}
