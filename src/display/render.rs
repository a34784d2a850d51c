//! Pure projections from dashboard data to slot writes.

use super::{SlotWrite, UpdateCard, UpdateList};
use crate::model::{Counter, FeedKind, MetricsSnapshot, UpdateEntry, UpdateFeed};
use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// One write per counter, value as decimal text.
pub fn metric_slots(metrics: &MetricsSnapshot) -> Vec<SlotWrite> {
    Counter::ALL
        .iter()
        .map(|counter| SlotWrite::Counter(*counter, metrics.get(*counter).to_string()))
        .collect()
}

/// One write per update list: cards in received order, or the placeholder.
pub fn feed_slots(feed: &UpdateFeed) -> Vec<SlotWrite> {
    [FeedKind::Company, FeedKind::Site]
        .into_iter()
        .map(|kind| SlotWrite::Updates(kind, update_list(feed.entries(kind))))
        .collect()
}

pub fn update_list(entries: &[UpdateEntry]) -> UpdateList {
    if entries.is_empty() {
        return UpdateList::Placeholder;
    }
    UpdateList::Cards(entries.iter().map(update_card).collect())
}

fn update_card(entry: &UpdateEntry) -> UpdateCard {
    UpdateCard {
        date: format_entry_date(entry.date),
        title: sanitize_text(&entry.title),
        content: sanitize_text(&entry.content),
    }
}

/// `Jan 6, 2026`
pub fn format_entry_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Jan 6, 2026, 03:04 PM`
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%b %-d, %Y, %I:%M %p").to_string()
}

pub fn format_now() -> String {
    format_timestamp(&Local::now())
}

/// Makes remote text safe to put on a terminal.
///
/// Line breaks and tabs become spaces; every other control character,
/// including ESC, is dropped so escape sequences cannot reach the screen.
pub fn sanitize_text(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}
