//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::EventSource;
use ratatui::prelude::Color;
use std::time::Duration;

/// Get a ratatui color for an event based on where it came from
pub fn get_source_color(source: &EventSource) -> Color {
    match source {
        EventSource::Metrics => Color::Cyan,
        EventSource::Updates => Color::Yellow,
        EventSource::Controller => Color::Green,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Format a countdown as `4m 05s`
pub fn format_countdown(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{}m {:02}s", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_keeps_month_day_and_minutes() {
        assert_eq!(
            format_compact_timestamp("2026-01-06 15:04:59"),
            "01-06 15:04"
        );
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn countdown_pads_seconds() {
        assert_eq!(format_countdown(Duration::from_secs(245)), "4m 05s");
        assert_eq!(format_countdown(Duration::ZERO), "0m 00s");
    }
}
