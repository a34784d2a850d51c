//! Sample data shown when a resource cannot be loaded.

use crate::model::{MetricsSnapshot, UpdateEntry, UpdateFeed};
use chrono::NaiveDate;

pub fn sample_metrics() -> MetricsSnapshot {
    MetricsSnapshot {
        copper_runs: 45,
        fiber_runs: 32,
        bricks_patched: 18,
        fusion_racks: 12,
        errors_rework: 3,
    }
}

pub fn sample_updates() -> UpdateFeed {
    UpdateFeed {
        company: vec![
            UpdateEntry::new(
                jan(6),
                "Q1 Goals Announced",
                "New quarterly targets have been set. Focus on fiber deployment and quality improvements.",
            ),
            UpdateEntry::new(
                jan(3),
                "Safety Training Reminder",
                "All team members must complete safety certification by January 15th.",
            ),
        ],
        site: vec![
            UpdateEntry::new(
                jan(6),
                "Building A - Fiber Installation",
                "Fiber runs completed on floors 1-3. Floor 4 scheduled for tomorrow.",
            ),
            UpdateEntry::new(
                jan(5),
                "Equipment Delivery",
                "New fusion splicers arrived. Available for checkout from equipment room.",
            ),
        ],
    }
}

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_updates_have_two_entries_per_feed() {
        let feed = sample_updates();
        assert_eq!(feed.company.len(), 2);
        assert_eq!(feed.site.len(), 2);
        assert_eq!(feed.company[1].date, NaiveDate::from_ymd_opt(2026, 1, 3).unwrap());
        assert_eq!(feed.site[1].title, "Equipment Delivery");
    }
}
