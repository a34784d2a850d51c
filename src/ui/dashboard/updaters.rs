//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from the board and events

use super::state::{DashboardState, DataOrigin};

use crate::display::Board;
use crate::events::{Event, EventSource, EventType};

impl DashboardState {
    /// Update the dashboard state with a new tick, the latest board and queued events.
    pub fn update(&mut self, board: Board) {
        self.tick += 1;
        self.board = board;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
            self.add_to_activity_log(event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &Event) {
        let origin = match event.event_type {
            EventType::Success => DataOrigin::Live,
            EventType::Error => DataOrigin::Sample,
            EventType::Refresh => return,
        };
        match event.source {
            EventSource::Metrics => self.set_metrics_origin(origin),
            EventSource::Updates => self.set_updates_origin(origin),
            EventSource::Controller => {}
        }
    }
}
