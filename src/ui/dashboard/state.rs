//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::dashboard_consts::MAX_ACTIVITY_LOGS;
use crate::display::Board;
use crate::environment::Environment;
use crate::events::Event;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Whether a panel shows fetched data or the fallback sample.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum DataOrigin {
    #[default]
    Pending,
    Live,
    Sample,
}

/// Dashboard state, refreshed from the shared board every frame.
#[derive(Debug)]
pub struct DashboardState {
    /// Where the resources are read from.
    pub environment: Environment,
    /// The start time of the application, used for uptime and the refresh countdown.
    pub start_time: Instant,
    /// Automatic refresh interval.
    pub refresh_interval: Duration,
    /// Latest copy of the display slots.
    pub board: Board,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    /// Origin of the counters currently shown
    metrics_origin: DataOrigin,
    /// Origin of the update lists currently shown
    updates_origin: DataOrigin,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: &UIConfig) -> Self {
        Self {
            environment,
            start_time,
            refresh_interval: ui_config.refresh_interval,
            board: Board::default(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            metrics_origin: DataOrigin::Pending,
            updates_origin: DataOrigin::Pending,
        }
    }

    pub fn metrics_origin(&self) -> DataOrigin {
        self.metrics_origin
    }

    pub fn updates_origin(&self) -> DataOrigin {
        self.updates_origin
    }

    // Setters for private fields (for updaters)
    pub fn set_metrics_origin(&mut self, origin: DataOrigin) {
        self.metrics_origin = origin;
    }

    pub fn set_updates_origin(&mut self, origin: DataOrigin) {
        self.updates_origin = origin;
    }

    /// Time left until the next automatic load cycle.
    pub fn time_until_auto_refresh(&self) -> Duration {
        let period = self.refresh_interval.as_secs().max(1);
        let since_last = self.start_time.elapsed().as_secs() % period;
        Duration::from_secs(period - since_last)
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}
