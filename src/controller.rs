//! Dashboard controller
//!
//! Orchestrates periodic and on-demand refresh of the two sub-loads and
//! projects their results onto the display surface.

use crate::consts::dashboard_consts::{LOAD_FAILURE_NOTICE, REFRESH_TRIGGER_QUEUE_SIZE, refresh};
use crate::display::render::{feed_slots, format_now, metric_slots};
use crate::display::{ControlState, DisplaySurface, SlotWrite};
use crate::error_classifier::ErrorClassifier;
use crate::events::{EventSender, EventSource, EventType};
use crate::fallback::{sample_metrics, sample_updates};
use crate::logging::LogLevel;
use crate::model::{MetricsSnapshot, UpdateFeed};
use crate::source::DataSource;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle, JoinSet};
use tokio::time::{Instant, MissedTickBehavior, interval_at, sleep};
use tokio_util::sync::CancellationToken;

#[derive(Error, Debug)]
pub enum ControllerError {
    /// A sub-load task died before finishing its own recovery.
    #[error("Sub-load failed: {0}")]
    SubLoad(#[from] JoinError),
}

/// Timing knobs for the controller.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Interval between automatic load cycles.
    pub refresh_interval: Duration,
    /// How long the refresh control stays disabled after a manual load completes.
    pub settle_delay: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            refresh_interval: refresh::auto_refresh_interval(),
            settle_delay: refresh::settle_delay(),
        }
    }
}

pub struct DashboardController {
    source: Arc<dyn DataSource>,
    surface: Arc<dyn DisplaySurface>,
    events: EventSender,
    classifier: ErrorClassifier,
    config: ControllerConfig,
    /// Set while a manual refresh holds the control disabled.
    refreshing: AtomicBool,
}

impl DashboardController {
    pub fn new(
        source: Arc<dyn DataSource>,
        surface: Arc<dyn DisplaySurface>,
        events: EventSender,
        config: ControllerConfig,
    ) -> Arc<Self> {
        Arc::new(Self {
            source,
            surface,
            events,
            classifier: ErrorClassifier::new(),
            config,
            refreshing: AtomicBool::new(false),
        })
    }

    /// Stamps the time, starts the first load, wires the refresh trigger and
    /// schedules the periodic load cycle.
    pub fn initialize(self: &Arc<Self>) -> ControllerHandle {
        self.update_last_updated();

        let (trigger_sender, trigger_receiver) = mpsc::channel(REFRESH_TRIGGER_QUEUE_SIZE);
        let cancel = CancellationToken::new();
        let task = tokio::spawn(Arc::clone(self).run(trigger_receiver, cancel.clone()));

        ControllerHandle {
            trigger: RefreshTrigger {
                sender: trigger_sender,
            },
            cancel,
            task,
        }
    }

    async fn run(self: Arc<Self>, mut triggers: mpsc::Receiver<()>, cancel: CancellationToken) {
        let mut in_flight = JoinSet::new();

        let this = Arc::clone(&self);
        in_flight.spawn(async move {
            let _ = this.load_all().await;
        });

        let period = self.config.refresh_interval;
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    let this = Arc::clone(&self);
                    in_flight.spawn(async move {
                        let _ = this.load_all().await;
                    });
                }
                Some(()) = triggers.recv() => {
                    let this = Arc::clone(&self);
                    in_flight.spawn(async move {
                        this.refresh().await;
                    });
                }
                Some(_) = in_flight.join_next(), if !in_flight.is_empty() => {}
            }
        }

        in_flight.shutdown().await;
        log::debug!("dashboard controller stopped");
    }

    /// Runs both sub-loads concurrently and waits for both.
    ///
    /// Fetch failures never surface here; each sub-load has already rendered
    /// its fallback. An `Err` means a sub-load task itself died.
    pub async fn load_all(self: &Arc<Self>) -> Result<(), ControllerError> {
        // Dropping the set aborts both sub-loads, so a cancelled cycle writes nothing more.
        let mut sub_loads = JoinSet::new();
        let this = Arc::clone(self);
        sub_loads.spawn(async move { this.load_metrics().await });
        let this = Arc::clone(self);
        sub_loads.spawn(async move { this.load_updates().await });

        let mut failure = None;
        while let Some(joined) = sub_loads.join_next().await {
            if let Err(e) = joined {
                failure.get_or_insert(e);
            }
        }

        if let Some(e) = failure {
            let message = format!("Error loading data: {}", e);
            self.events
                .send(
                    EventSource::Controller,
                    message,
                    EventType::Error,
                    LogLevel::Error,
                )
                .await;
            self.show_error(LOAD_FAILURE_NOTICE).await;
            return Err(ControllerError::SubLoad(e));
        }

        self.surface.write(SlotWrite::Notice(None));
        Ok(())
    }

    /// Fetches metrics, substituting the sample snapshot on any failure.
    pub async fn load_metrics(&self) {
        let snapshot = match self.source.fetch_metrics().await {
            Ok(snapshot) => {
                self.events
                    .send(
                        EventSource::Metrics,
                        "Loaded metrics".to_string(),
                        EventType::Success,
                        LogLevel::Debug,
                    )
                    .await;
                snapshot
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                self.events
                    .send(
                        EventSource::Metrics,
                        format!(
                            "Error loading metrics: {} - showing sample data",
                            e.summary()
                        ),
                        EventType::Error,
                        log_level,
                    )
                    .await;
                sample_metrics()
            }
        };
        self.render_metrics(&snapshot);
    }

    /// Fetches updates, substituting the sample feed on any failure.
    pub async fn load_updates(&self) {
        let feed = match self.source.fetch_updates().await {
            Ok(feed) => {
                self.events
                    .send(
                        EventSource::Updates,
                        format!(
                            "Loaded {} company and {} site updates",
                            feed.company.len(),
                            feed.site.len()
                        ),
                        EventType::Success,
                        LogLevel::Debug,
                    )
                    .await;
                feed
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                self.events
                    .send(
                        EventSource::Updates,
                        format!(
                            "Error loading updates: {} - showing sample data",
                            e.summary()
                        ),
                        EventType::Error,
                        log_level,
                    )
                    .await;
                sample_updates()
            }
        };
        self.render_updates(&feed);
    }

    pub fn render_metrics(&self, metrics: &MetricsSnapshot) {
        for write in metric_slots(metrics) {
            self.surface.write(write);
        }
    }

    pub fn render_updates(&self, feed: &UpdateFeed) {
        for write in feed_slots(feed) {
            self.surface.write(write);
        }
    }

    /// Manual refresh: disables the control, loads, then re-enables it after
    /// the settle delay and stamps the time, whatever the load's outcome.
    ///
    /// Returns `false` if the control was already disabled.
    pub async fn refresh(self: &Arc<Self>) -> bool {
        if self
            .refreshing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::debug!("refresh ignored, control is disabled");
            return false;
        }
        let guard = RefreshGuard { controller: self };

        self.surface
            .write(SlotWrite::RefreshControl(ControlState::Refreshing));
        self.events
            .send(
                EventSource::Controller,
                "Refreshing dashboard data...".to_string(),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        let outcome = self.load_all().await;

        sleep(self.config.settle_delay).await;
        drop(guard);
        self.update_last_updated();

        if outcome.is_ok() {
            self.events
                .send(
                    EventSource::Controller,
                    "Dashboard refreshed".to_string(),
                    EventType::Success,
                    LogLevel::Info,
                )
                .await;
        }
        true
    }

    /// Reports a failure of the whole load cycle, both in the log and on screen.
    pub async fn show_error(&self, message: &str) {
        self.events
            .send(
                EventSource::Controller,
                message.to_string(),
                EventType::Error,
                LogLevel::Error,
            )
            .await;
        self.surface.write(SlotWrite::Notice(Some(message.to_string())));
    }

    pub fn update_last_updated(&self) {
        self.surface.write(SlotWrite::LastUpdated(format_now()));
    }
}

/// Re-enables the refresh control when a refresh ends, including when the
/// refresh is dropped partway through by a stopping controller.
struct RefreshGuard<'a> {
    controller: &'a DashboardController,
}

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        self.controller
            .surface
            .write(SlotWrite::RefreshControl(ControlState::Idle));
        self.controller.refreshing.store(false, Ordering::Release);
    }
}

/// Activates the manual refresh. Cheap to clone; hand one to each input.
#[derive(Debug, Clone)]
pub struct RefreshTrigger {
    sender: mpsc::Sender<()>,
}

impl RefreshTrigger {
    /// Returns `false` if the activation was dropped (controller stopped or queue full).
    pub fn activate(&self) -> bool {
        self.sender.try_send(()).is_ok()
    }
}

/// Owner's handle on a running controller.
#[derive(Debug)]
pub struct ControllerHandle {
    trigger: RefreshTrigger,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl ControllerHandle {
    pub fn refresh_trigger(&self) -> RefreshTrigger {
        self.trigger.clone()
    }

    /// Token that stops the controller when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Stops the periodic timer and the trigger listener.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Stops the controller and waits for its task to finish.
    pub async fn shutdown(self) {
        self.stop();
        let _ = self.task.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{Board, SharedBoard, UpdateList};
    use crate::events::Event;
    use crate::model::{Counter, FeedKind, UpdateEntry};
    use crate::source::MockDataSource;
    use crate::source::error::SourceError;
    use chrono::NaiveDate;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    /// Records every slot write with the (paused) tokio clock.
    #[derive(Default)]
    struct RecordingSurface {
        board: SharedBoard,
        writes: Mutex<Vec<(Instant, SlotWrite)>>,
    }

    impl RecordingSurface {
        fn writes(&self) -> Vec<(Instant, SlotWrite)> {
            self.writes.lock().unwrap().clone()
        }

        fn count(&self, pred: impl Fn(&SlotWrite) -> bool) -> usize {
            self.writes().iter().filter(|(_, w)| pred(w)).count()
        }

        fn board(&self) -> Board {
            self.board.snapshot()
        }
    }

    impl DisplaySurface for RecordingSurface {
        fn write(&self, write: SlotWrite) {
            self.writes
                .lock()
                .unwrap()
                .push((Instant::now(), write.clone()));
            self.board.write(write);
        }
    }

    /// Source that counts calls and can be slowed down.
    struct StubSource {
        metrics: Result<MetricsSnapshot, u16>,
        feed: Result<UpdateFeed, u16>,
        delay: Duration,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn new(metrics: Result<MetricsSnapshot, u16>, feed: Result<UpdateFeed, u16>) -> Self {
            Self {
                metrics,
                feed,
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        fn metrics_calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl DataSource for StubSource {
        fn describe(&self) -> String {
            "stub".to_string()
        }

        async fn fetch_metrics(&self) -> Result<MetricsSnapshot, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            sleep(self.delay).await;
            self.metrics.map_err(|status| SourceError::Http {
                status,
                message: String::new(),
            })
        }

        async fn fetch_updates(&self) -> Result<UpdateFeed, SourceError> {
            sleep(self.delay).await;
            self.feed.clone().map_err(|status| SourceError::Http {
                status,
                message: String::new(),
            })
        }
    }

    fn live_metrics() -> MetricsSnapshot {
        MetricsSnapshot {
            copper_runs: 1,
            fiber_runs: 2,
            bricks_patched: 3,
            fusion_racks: 4,
            errors_rework: 5,
        }
    }

    fn live_feed() -> UpdateFeed {
        UpdateFeed {
            company: vec![UpdateEntry::new(
                NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
                "Crew lunch",
                "Friday at noon",
            )],
            site: Vec::new(),
        }
    }

    fn controller_with(
        source: Arc<dyn DataSource>,
    ) -> (Arc<DashboardController>, Arc<RecordingSurface>, mpsc::Receiver<Event>) {
        let surface = Arc::new(RecordingSurface::default());
        let (tx, rx) = mpsc::channel(1024);
        let controller = DashboardController::new(
            source,
            surface.clone(),
            EventSender::new(tx),
            ControllerConfig::default(),
        );
        (controller, surface, rx)
    }

    fn counters(board: &Board) -> Vec<String> {
        Counter::ALL
            .iter()
            .map(|c| board.counter(*c).unwrap_or("-").to_string())
            .collect()
    }

    #[tokio::test]
    async fn fresh_data_is_rendered() {
        let source = Arc::new(StubSource::new(Ok(live_metrics()), Ok(live_feed())));
        let (controller, surface, _rx) = controller_with(source);

        controller.load_all().await.unwrap();

        let board = surface.board();
        assert_eq!(counters(&board), ["1", "2", "3", "4", "5"]);
        match board.updates(FeedKind::Company) {
            Some(UpdateList::Cards(cards)) => {
                assert_eq!(cards.len(), 1);
                assert_eq!(cards[0].date, "Apr 1, 2026");
                assert_eq!(cards[0].title, "Crew lunch");
            }
            other => panic!("expected cards, got {:?}", other),
        }
        assert_eq!(board.updates(FeedKind::Site), Some(&UpdateList::Placeholder));
        assert!(board.notice().is_none());
    }

    #[tokio::test]
    async fn metrics_failure_renders_sample_counters() {
        let source = Arc::new(StubSource::new(Err(500), Ok(live_feed())));
        let (controller, surface, mut rx) = controller_with(source);

        controller.load_all().await.unwrap();

        assert_eq!(counters(&surface.board()), ["45", "32", "18", "12", "3"]);
        // The other sub-load is unaffected.
        assert!(matches!(
            surface.board().updates(FeedKind::Company),
            Some(UpdateList::Cards(cards)) if cards[0].title == "Crew lunch"
        ));

        let mut saw_warning = false;
        while let Ok(event) = rx.try_recv() {
            if event.source == EventSource::Metrics && event.event_type == EventType::Error {
                assert_eq!(event.log_level, LogLevel::Warn);
                saw_warning = true;
            }
        }
        assert!(saw_warning);
    }

    #[tokio::test]
    async fn updates_failure_renders_sample_feed() {
        let source = Arc::new(StubSource::new(Ok(live_metrics()), Err(404)));
        let (controller, surface, _rx) = controller_with(source);

        controller.load_all().await.unwrap();

        let board = surface.board();
        let dates = |kind: FeedKind| -> Vec<String> {
            match board.updates(kind) {
                Some(UpdateList::Cards(cards)) => cards.iter().map(|c| c.date.clone()).collect(),
                other => panic!("expected cards, got {:?}", other),
            }
        };
        assert_eq!(dates(FeedKind::Company), ["Jan 6, 2026", "Jan 3, 2026"]);
        assert_eq!(dates(FeedKind::Site), ["Jan 6, 2026", "Jan 5, 2026"]);
        assert_eq!(counters(&board), ["1", "2", "3", "4", "5"]);
    }

    #[tokio::test]
    async fn mocked_source_is_called_once_per_sub_load() {
        let mut source = MockDataSource::new();
        source
            .expect_fetch_metrics()
            .times(1)
            .returning(|| Ok(MetricsSnapshot::default()));
        source
            .expect_fetch_updates()
            .times(1)
            .returning(|| Ok(UpdateFeed::default()));
        let (controller, surface, _rx) = controller_with(Arc::new(source));

        controller.load_all().await.unwrap();

        let board = surface.board();
        assert_eq!(counters(&board), ["0", "0", "0", "0", "0"]);
        assert_eq!(board.updates(FeedKind::Company), Some(&UpdateList::Placeholder));
        assert_eq!(board.updates(FeedKind::Site), Some(&UpdateList::Placeholder));
    }

    #[tokio::test]
    async fn dead_sub_load_shows_notice_but_other_still_renders() {
        let mut source = MockDataSource::new();
        source
            .expect_fetch_metrics()
            .returning(|| panic!("metrics task died"));
        source
            .expect_fetch_updates()
            .returning(|| Ok(live_feed()));
        let (controller, surface, mut rx) = controller_with(Arc::new(source));

        let result = controller.load_all().await;

        assert!(matches!(result, Err(ControllerError::SubLoad(_))));
        let board = surface.board();
        assert_eq!(board.notice(), Some(LOAD_FAILURE_NOTICE));
        assert!(board.updates(FeedKind::Company).is_some());

        let mut errors = 0;
        while let Ok(event) = rx.try_recv() {
            if event.source == EventSource::Controller && event.log_level == LogLevel::Error {
                errors += 1;
            }
        }
        assert_eq!(errors, 2);
    }

    #[tokio::test]
    async fn successful_cycle_clears_previous_notice() {
        let source = Arc::new(StubSource::new(Ok(live_metrics()), Ok(live_feed())));
        let (controller, surface, _rx) = controller_with(source);

        controller.show_error(LOAD_FAILURE_NOTICE).await;
        assert_eq!(surface.board().notice(), Some(LOAD_FAILURE_NOTICE));

        controller.load_all().await.unwrap();
        assert!(surface.board().notice().is_none());
    }

    #[tokio::test]
    async fn repeated_cycles_with_identical_responses_are_idempotent() {
        let source = Arc::new(StubSource::new(Ok(live_metrics()), Err(503)));
        let (controller, surface, _rx) = controller_with(source);

        controller.load_all().await.unwrap();
        let first = surface.board();
        controller.load_all().await.unwrap();
        assert_eq!(surface.board(), first);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_refresh_holds_control_for_settle_delay() {
        let source = Arc::new(StubSource::new(Ok(live_metrics()), Ok(live_feed())));
        let (controller, surface, _rx) = controller_with(source);

        let started = Instant::now();
        assert!(controller.refresh().await);

        let writes = surface.writes();
        let (disabled_at, _) = writes
            .iter()
            .find(|(_, w)| *w == SlotWrite::RefreshControl(ControlState::Refreshing))
            .unwrap();
        let (enabled_at, _) = writes
            .iter()
            .find(|(_, w)| *w == SlotWrite::RefreshControl(ControlState::Idle))
            .unwrap();
        assert_eq!(*disabled_at, started);
        assert!(*enabled_at - *disabled_at >= refresh::settle_delay());

        // The timestamp is written after the control is enabled again.
        assert!(matches!(writes.last(), Some((_, SlotWrite::LastUpdated(_)))));
        assert_eq!(surface.board().control(), ControlState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_refresh_finishes_even_when_load_fails() {
        let mut source = MockDataSource::new();
        source
            .expect_fetch_metrics()
            .returning(|| panic!("metrics task died"));
        source
            .expect_fetch_updates()
            .returning(|| Ok(UpdateFeed::default()));
        let (controller, surface, _rx) = controller_with(Arc::new(source));

        assert!(controller.refresh().await);

        let board = surface.board();
        assert_eq!(board.control(), ControlState::Idle);
        assert!(board.last_updated().is_some());
        assert_eq!(board.notice(), Some(LOAD_FAILURE_NOTICE));
        assert_eq!(
            surface.count(|w| matches!(w, SlotWrite::LastUpdated(_))),
            1
        );
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_is_ignored_while_control_is_disabled() {
        let source = Arc::new(
            StubSource::new(Ok(live_metrics()), Ok(live_feed())).with_delay(Duration::from_secs(2)),
        );
        let (controller, surface, _rx) = controller_with(source.clone());

        let first = {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move { controller.refresh().await })
        };
        tokio::task::yield_now().await;
        assert!(surface.board().is_refreshing());

        assert!(!controller.refresh().await);
        assert!(first.await.unwrap());
        assert_eq!(source.metrics_calls(), 1);
        assert!(!surface.board().is_refreshing());
    }

    #[tokio::test(start_paused = true)]
    async fn initialize_loads_immediately_and_every_interval() {
        let source = Arc::new(StubSource::new(Ok(live_metrics()), Ok(live_feed())));
        let (controller, surface, _rx) = controller_with(source.clone());

        let handle = controller.initialize();
        assert!(surface.board().last_updated().is_some());

        sleep(Duration::from_secs(1)).await;
        assert_eq!(source.metrics_calls(), 1);
        assert_eq!(counters(&surface.board()), ["1", "2", "3", "4", "5"]);

        sleep(refresh::auto_refresh_interval()).await;
        assert_eq!(source.metrics_calls(), 2);

        sleep(refresh::auto_refresh_interval() * 2).await;
        assert_eq!(source.metrics_calls(), 4);

        handle.shutdown().await;
        sleep(refresh::auto_refresh_interval() * 3).await;
        assert_eq!(source.metrics_calls(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_refresh_during_periodic_load_leaves_control_enabled() {
        let source = Arc::new(
            StubSource::new(Ok(live_metrics()), Ok(live_feed())).with_delay(Duration::from_secs(3)),
        );
        let (controller, surface, _rx) = controller_with(source.clone());
        let handle = controller.initialize();

        // The initial load is still in flight when the trigger fires.
        sleep(Duration::from_secs(1)).await;
        assert!(handle.refresh_trigger().activate());
        sleep(Duration::from_millis(10)).await;
        assert!(surface.board().is_refreshing());

        sleep(Duration::from_secs(10)).await;
        let board = surface.board();
        assert_eq!(board.control(), ControlState::Idle);
        assert_eq!(counters(&board), ["1", "2", "3", "4", "5"]);
        assert_eq!(source.metrics_calls(), 2);

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn trigger_is_inert_after_stop() {
        let source = Arc::new(StubSource::new(Ok(live_metrics()), Ok(live_feed())));
        let (controller, _surface, _rx) = controller_with(source.clone());
        let handle = controller.initialize();
        let trigger = handle.refresh_trigger();

        handle.shutdown().await;
        sleep(Duration::from_secs(5)).await;
        assert!(!trigger.activate());
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_sub_loads_still_in_flight() {
        let source = Arc::new(
            StubSource::new(Ok(live_metrics()), Ok(live_feed())).with_delay(Duration::from_secs(3)),
        );
        let (controller, surface, _rx) = controller_with(source);
        let handle = controller.initialize();

        sleep(Duration::from_secs(1)).await;
        handle.shutdown().await;
        let writes_at_shutdown = surface.writes().len();

        sleep(Duration::from_secs(5)).await;
        assert_eq!(surface.writes().len(), writes_at_shutdown);
        assert_eq!(surface.count(|w| matches!(w, SlotWrite::Counter(..))), 0);
        assert!(surface.board().updates(FeedKind::Company).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_mid_refresh_re_enables_control() {
        let source = Arc::new(
            StubSource::new(Ok(live_metrics()), Ok(live_feed())).with_delay(Duration::from_secs(3)),
        );
        let (controller, surface, _rx) = controller_with(source.clone());
        let handle = controller.initialize();

        // Let the initial load finish, then start a manual refresh.
        sleep(Duration::from_secs(4)).await;
        assert!(handle.refresh_trigger().activate());
        sleep(Duration::from_millis(100)).await;
        assert!(surface.board().is_refreshing());

        handle.shutdown().await;
        assert_eq!(surface.board().control(), ControlState::Idle);

        // The control can be used again.
        assert!(controller.refresh().await);
        assert_eq!(source.metrics_calls(), 3);
    }
}
