//! Engine - drives the TEA message loop and owns the timers
//!
//! The engine owns the [`ViewState`], the query-parameter store, and the two
//! timer tasks (initial load, filter settle). Callers interact through an
//! [`EngineHandle`]: operations go in as [`Message`]s over an unbounded
//! channel, rendered frames come out on a watch channel as [`Snapshot`]s.
//!
//! Commits take one path: a filter operation yields
//! [`UpdateAction::CommitQuery`], the engine enqueues the matching
//! [`Message::QueryChanged`], and that message writes the store and
//! re-derives state. External navigation injects the same message, so both
//! arrive at identical state.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use shopfront_core::prelude::*;
use shopfront_core::{Catalog, QueryParams};

use crate::config::TimingSettings;
use crate::handler::{update, UpdateAction};
use crate::message::Message;
use crate::snapshot::Snapshot;
use crate::state::ViewState;
use crate::store::{QueryStore, ScrollSink};

/// Owns the state, store, and timers; processes messages one at a time.
pub struct Engine {
    state: ViewState,
    store: Box<dyn QueryStore>,
    scroll: Box<dyn ScrollSink>,
    timing: TimingSettings,

    tx: mpsc::UnboundedSender<Message>,
    rx: mpsc::UnboundedReceiver<Message>,
    snapshot_tx: watch::Sender<Snapshot>,

    initial_timer: Option<JoinHandle<()>>,
    settle_timer: Option<JoinHandle<()>>,
}

impl Engine {
    /// Create the engine: read the store, derive the initial state, start
    /// the one-shot initial-load timer.
    ///
    /// Must be called within a tokio runtime.
    pub fn new(
        catalog: Arc<Catalog>,
        store: Box<dyn QueryStore>,
        scroll: Box<dyn ScrollSink>,
        timing: TimingSettings,
    ) -> Self {
        let params = store.read();
        let state = ViewState::new(catalog, &params);
        let (tx, rx) = mpsc::unbounded_channel();
        let (snapshot_tx, _) = watch::channel(Snapshot::capture(&state));

        let initial_timer = {
            let tx = tx.clone();
            let delay = Duration::from_millis(timing.initial_load_ms);
            Some(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send(Message::InitialLoadFinished);
            }))
        };

        debug!(query = %params.to_query_string(), "Engine initialized");
        Self {
            state,
            store,
            scroll,
            timing,
            tx,
            rx,
            snapshot_tx,
            initial_timer,
            settle_timer: None,
        }
    }

    /// A handle for feeding operations in and observing snapshots.
    pub fn handle(&self) -> EngineHandle {
        EngineHandle {
            tx: self.tx.clone(),
            snapshot_rx: self.snapshot_tx.subscribe(),
        }
    }

    /// Process one message plus any follow-ups it queues, then publish a
    /// snapshot. Returns true once the engine has been torn down.
    pub fn process(&mut self, message: Message) -> bool {
        let mut queue = VecDeque::new();
        queue.push_back(message);

        while let Some(msg) = queue.pop_front() {
            // The committed-change path writes the store; own commits and
            // external navigation both land here.
            if let Message::QueryChanged { params } = &msg {
                self.store.replace(params);
            }

            let result = update(&mut self.state, msg);

            if let Some(action) = result.action {
                match action {
                    UpdateAction::CommitQuery {
                        params,
                        scroll_to_top,
                    } => {
                        if scroll_to_top {
                            self.scroll.scroll_to_top();
                        }
                        queue.push_back(Message::QueryChanged { params });
                    }
                    UpdateAction::ScheduleFilterSettle { generation } => {
                        self.schedule_filter_settle(generation);
                    }
                }
            }

            if let Some(follow_up) = result.message {
                queue.push_back(follow_up);
            }
        }

        self.snapshot_tx.send_replace(Snapshot::capture(&self.state));

        if self.state.is_disposed() {
            self.dispose();
            true
        } else {
            false
        }
    }

    /// Run until torn down or all handles are dropped.
    pub async fn run(mut self) {
        while let Some(msg) = self.rx.recv().await {
            if self.process(msg) {
                break;
            }
        }
        self.dispose();
        debug!("Engine loop finished");
    }

    /// (Re)arm the settle timer. The previous timer is aborted outright;
    /// its generation would be stale anyway, this just saves the wakeup.
    fn schedule_filter_settle(&mut self, generation: u64) {
        if let Some(handle) = self.settle_timer.take() {
            handle.abort();
        }

        let tx = self.tx.clone();
        let delay = Duration::from_millis(self.timing.filter_settle_ms);
        self.settle_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Message::FilterSettled { generation });
        }));
    }

    /// Cancel both timers. Idempotent.
    fn dispose(&mut self) {
        if let Some(handle) = self.initial_timer.take() {
            handle.abort();
        }
        if let Some(handle) = self.settle_timer.take() {
            handle.abort();
        }
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Cheap-to-clone front door to a running engine.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    tx: mpsc::UnboundedSender<Message>,
    snapshot_rx: watch::Receiver<Snapshot>,
}

impl EngineHandle {
    fn send(&self, msg: Message) -> Result<()> {
        self.tx
            .send(msg)
            .map_err(|e| Error::channel_send(e.to_string()))
    }

    pub fn set_category(&self, name: impl Into<String>) -> Result<()> {
        self.send(Message::SetCategory { name: name.into() })
    }

    pub fn set_subcategory(&self, name: impl Into<String>) -> Result<()> {
        self.send(Message::SetSubCategory { name: name.into() })
    }

    pub fn submit_search(&self, text: impl Into<String>) -> Result<()> {
        self.send(Message::SubmitSearch { text: text.into() })
    }

    pub fn change_page(&self, page: u32) -> Result<()> {
        self.send(Message::ChangePage { page })
    }

    pub fn toggle_category_expansion(&self, name: impl Into<String>) -> Result<()> {
        self.send(Message::ToggleCategoryExpansion { name: name.into() })
    }

    pub fn search_input_changed(&self, text: impl Into<String>) -> Result<()> {
        self.send(Message::SearchInputChanged { text: text.into() })
    }

    /// Inject an externally-navigated parameter map (the store changed
    /// under us, e.g. browser back/forward).
    pub fn navigated(&self, params: QueryParams) -> Result<()> {
        self.send(Message::QueryChanged { params })
    }

    pub fn teardown(&self) -> Result<()> {
        self.send(Message::Teardown)
    }

    /// Latest published frame.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Wait for the next published frame.
    pub async fn next_snapshot(&mut self) -> Result<Snapshot> {
        self.snapshot_rx
            .changed()
            .await
            .map_err(|_| Error::ChannelClosed)?;
        Ok(self.snapshot_rx.borrow().clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::store::MemoryQueryStore;
    use shopfront_core::builtin_catalog;

    struct RecordingScroll {
        count: Arc<AtomicUsize>,
    }

    impl ScrollSink for RecordingScroll {
        fn scroll_to_top(&mut self) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn test_engine(query: &str) -> (Engine, Arc<AtomicUsize>) {
        let scrolls = Arc::new(AtomicUsize::new(0));
        let engine = Engine::new(
            Arc::new(builtin_catalog()),
            Box::new(MemoryQueryStore::from_query_string(query)),
            Box::new(RecordingScroll {
                count: scrolls.clone(),
            }),
            TimingSettings::default(),
        );
        (engine, scrolls)
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_state_seeded_from_store() {
        let (engine, _) = test_engine("category=Police&page=2");
        let handle = engine.handle();

        let snap = handle.snapshot();
        assert_eq!(snap.page, 2);
        assert!(snap.initial_loading);
        assert_eq!(snap.query, "category=Police&page=2");
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_load_timer_fires() {
        let (mut engine, _) = test_engine("");
        let handle = engine.handle();
        assert!(handle.snapshot().initial_loading);

        // Paused-clock recv auto-advances past the 1000ms sleep.
        let msg = engine.rx.recv().await.unwrap();
        assert_eq!(msg, Message::InitialLoadFinished);
        engine.process(msg);

        assert!(!handle.snapshot().initial_loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_commit_writes_store_and_rederives() {
        let (mut engine, _) = test_engine("");
        let handle = engine.handle();

        engine.process(Message::SetCategory {
            name: "Military Combat Uniform".to_string(),
        });

        let snap = handle.snapshot();
        assert_eq!(snap.query, "category=Military+Combat+Uniform");
        assert_eq!(snap.filtered_count, 8);
        assert!(snap.filter_loading);
        assert_eq!(engine.store.read().get("category"), Some("Military Combat Uniform"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_timer_clears_filter_loading() {
        let (mut engine, _) = test_engine("");
        let handle = engine.handle();

        engine.process(Message::SetCategory {
            name: "Police".to_string(),
        });
        assert!(handle.snapshot().filter_loading);

        let msg = engine.rx.recv().await.unwrap();
        assert_eq!(msg, Message::FilterSettled { generation: 1 });
        engine.process(msg);
        assert!(!handle.snapshot().filter_loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_changes_debounce_to_one_settle() {
        let (mut engine, _) = test_engine("");
        let handle = engine.handle();

        engine.process(Message::SetCategory {
            name: "Police".to_string(),
        });
        engine.process(Message::SubmitSearch {
            text: "boots".to_string(),
        });

        // The first timer was aborted; only the second generation arrives.
        let msg = engine.rx.recv().await.unwrap();
        assert_eq!(msg, Message::FilterSettled { generation: 2 });
        engine.process(msg);
        assert!(!handle.snapshot().filter_loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_change_scrolls_to_top() {
        let (mut engine, scrolls) = test_engine("");
        engine.process(Message::ChangePage { page: 2 });
        assert_eq!(scrolls.load(Ordering::SeqCst), 1);

        // Filter changes do not scroll.
        engine.process(Message::SetCategory {
            name: "Police".to_string(),
        });
        assert_eq!(scrolls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_external_navigation_same_path_as_own_commit() {
        let (mut engine, _) = test_engine("");
        let handle = engine.handle();

        engine.process(Message::QueryChanged {
            params: QueryParams::parse("search=bdu"),
        });

        let snap = handle.snapshot();
        assert_eq!(snap.filtered_count, 1);
        assert_eq!(snap.search_input, "bdu");
        assert!(snap.filter_loading);
        assert_eq!(engine.store.read().get("search"), Some("bdu"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_stops_engine() {
        let (mut engine, _) = test_engine("");
        let disposed = engine.process(Message::Teardown);
        assert!(disposed);
        assert!(engine.initial_timer.is_none());
        assert!(engine.settle_timer.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_loop_end_to_end() {
        let (engine, _) = test_engine("");
        let mut handle = engine.handle();
        let join = tokio::spawn(engine.run());

        handle.set_category("Military Combat Uniform").unwrap();
        let snap = handle.next_snapshot().await.unwrap();
        assert_eq!(snap.filtered_count, 8);

        handle.teardown().unwrap();
        join.await.unwrap();
    }
}
