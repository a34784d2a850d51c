//! Event System
//!
//! Diagnostic events emitted by the controller, shown in the activity log
//! and forwarded to the `log` facade.

use crate::logging::LogLevel;
use chrono::Local;
use std::fmt::Display;
use tokio::sync::mpsc;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventSource {
    /// The metrics sub-load.
    Metrics,
    /// The updates sub-load.
    Updates,
    /// The controller itself: load cycles, refreshes, failures at the join.
    Controller,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: EventSource,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(source: EventSource, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn should_display(&self) -> bool {
        // Success events are always shown
        self.event_type == EventType::Success || self.log_level.passes_env_threshold()
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.source, self.msg
        )
    }
}

/// Sends diagnostic events to whoever renders them.
///
/// Every event is also passed to the `log` facade, so a sender whose
/// receiver is gone still leaves a trace.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        log::log!(
            target: "team_dashboard",
            log::Level::from(event.log_level),
            "{}: {}",
            event.source,
            event.msg
        );
        let _ = self.sender.send(event).await;
    }

    pub async fn send(
        &self,
        source: EventSource,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::new(source, message, event_type, log_level))
            .await;
    }
}
