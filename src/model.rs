//! Dashboard data model
//!
//! Wire types for the metrics and updates resources.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

/// The five operational counters shown on the dashboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
pub enum Counter {
    #[strum(to_string = "Copper Runs")]
    CopperRuns,
    #[strum(to_string = "Fiber Runs")]
    FiberRuns,
    #[strum(to_string = "Bricks Patched")]
    BricksPatched,
    #[strum(to_string = "Fusion Racks")]
    FusionRacks,
    #[strum(to_string = "Errors / Rework")]
    ErrorsRework,
}

impl Counter {
    /// All counters, in display order.
    pub const ALL: [Counter; 5] = [
        Counter::CopperRuns,
        Counter::FiberRuns,
        Counter::BricksPatched,
        Counter::FusionRacks,
        Counter::ErrorsRework,
    ];

    /// Key of this counter in the metrics resource.
    pub fn wire_key(&self) -> &'static str {
        match self {
            Counter::CopperRuns => "copperRuns",
            Counter::FiberRuns => "fiberRuns",
            Counter::BricksPatched => "bricksPatched",
            Counter::FusionRacks => "fusionRacks",
            Counter::ErrorsRework => "errorsRework",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Most recently fetched counter values. Absent or null fields are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub copper_runs: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fiber_runs: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bricks_patched: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fusion_racks: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors_rework: u64,
}

impl MetricsSnapshot {
    pub fn get(&self, counter: Counter) -> u64 {
        match counter {
            Counter::CopperRuns => self.copper_runs,
            Counter::FiberRuns => self.fiber_runs,
            Counter::BricksPatched => self.bricks_patched,
            Counter::FusionRacks => self.fusion_racks,
            Counter::ErrorsRework => self.errors_rework,
        }
    }
}

/// A single dated update. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateEntry {
    #[serde(deserialize_with = "calendar_date")]
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
}

impl UpdateEntry {
    pub fn new(date: NaiveDate, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            date,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Which of the two update sequences a list belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum FeedKind {
    #[strum(to_string = "Company")]
    Company,
    #[strum(to_string = "Site")]
    Site,
}

/// Company and site updates, each in the order received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateFeed {
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: Vec<UpdateEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub site: Vec<UpdateEntry>,
}

impl UpdateFeed {
    pub fn entries(&self, kind: FeedKind) -> &[UpdateEntry] {
        match kind {
            FeedKind::Company => &self.company,
            FeedKind::Site => &self.site,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 date-time. The date is kept as written.
fn calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid update date: {:?}", raw))
    })
}

pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|datetime| datetime.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_fields_default_to_zero() {
        let snapshot: MetricsSnapshot =
            serde_json::from_str(r#"{"copperRuns": 7, "fusionRacks": null}"#).unwrap();
        assert_eq!(snapshot.get(Counter::CopperRuns), 7);
        assert_eq!(snapshot.get(Counter::FiberRuns), 0);
        assert_eq!(snapshot.get(Counter::FusionRacks), 0);
        assert_eq!(snapshot.get(Counter::ErrorsRework), 0);
    }

    #[test]
    fn metrics_ignore_unknown_keys() {
        let snapshot: MetricsSnapshot =
            serde_json::from_str(r#"{"fiberRuns": 3, "crewSize": 12}"#).unwrap();
        assert_eq!(snapshot.fiber_runs, 3);
    }

    #[test]
    fn metrics_reject_negative_counts() {
        let result = serde_json::from_str::<MetricsSnapshot>(r#"{"errorsRework": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn counters_map_to_wire_keys_in_order() {
        let keys: Vec<_> = Counter::ALL.iter().map(Counter::wire_key).collect();
        assert_eq!(
            keys,
            [
                "copperRuns",
                "fiberRuns",
                "bricksPatched",
                "fusionRacks",
                "errorsRework"
            ]
        );
        assert_eq!(Counter::ErrorsRework.to_string(), "Errors / Rework");
        assert_eq!(Counter::FusionRacks.index(), 3);
    }

    #[test]
    fn feed_sequences_default_to_empty_and_keep_order() {
        let feed: UpdateFeed = serde_json::from_str(
            r#"{"site": [
                {"date": "2026-01-02", "title": "b", "content": "second"},
                {"date": "2026-01-09", "title": "a", "content": "first"}
            ]}"#,
        )
        .unwrap();
        assert!(feed.company.is_empty());
        assert_eq!(feed.site.len(), 2);
        assert_eq!(feed.site[0].title, "b");
        assert_eq!(feed.entries(FeedKind::Site)[1].content, "first");

        let feed: UpdateFeed = serde_json::from_str(r#"{"company": null}"#).unwrap();
        assert!(feed.company.is_empty());
    }

    #[test]
    fn dates_accept_plain_and_timestamped_forms() {
        let expected = NaiveDate::from_ymd_opt(2026, 1, 6).unwrap();
        assert_eq!(parse_calendar_date("2026-01-06"), Some(expected));
        assert_eq!(
            parse_calendar_date("2026-01-06T23:30:00-08:00"),
            Some(expected)
        );
        assert_eq!(parse_calendar_date("January 6th"), None);
    }

    #[test]
    fn invalid_dates_make_the_feed_malformed() {
        let result = serde_json::from_str::<UpdateFeed>(
            r#"{"company": [{"date": "soon", "title": "t", "content": "c"}]}"#,
        );
        assert!(result.is_err());
    }
}
