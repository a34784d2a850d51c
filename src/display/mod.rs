//! Display surface
//!
//! The controller only ever writes text into named slots. A `Board` holds the
//! current value of every slot; the terminal UI draws it, the headless mode
//! prints each write as it happens.

pub mod render;

use crate::consts::dashboard_consts::NO_UPDATES_PLACEHOLDER;
use crate::model::{Counter, FeedKind};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// State of the manual refresh control.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, strum::Display)]
pub enum ControlState {
    /// Spinner off, control enabled.
    #[default]
    Idle,
    /// Spinner on, control disabled.
    Refreshing,
}

/// A rendered update, all fields already formatted and sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCard {
    pub date: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateList {
    Cards(Vec<UpdateCard>),
    Placeholder,
}

impl fmt::Display for UpdateList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateList::Placeholder => write!(f, "{}", NO_UPDATES_PLACEHOLDER),
            UpdateList::Cards(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{} | {}\n    {}", card.date, card.title, card.content)?;
                }
                Ok(())
            }
        }
    }
}

/// A single write into one display slot. Each write replaces the slot's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotWrite {
    Counter(Counter, String),
    Updates(FeedKind, UpdateList),
    LastUpdated(String),
    RefreshControl(ControlState),
    /// Visible failure notice; `None` clears it.
    Notice(Option<String>),
}

impl fmt::Display for SlotWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotWrite::Counter(counter, value) => write!(f, "{} = {}", counter.wire_key(), value),
            SlotWrite::Updates(kind, UpdateList::Placeholder) => {
                write!(f, "{} updates: {}", kind, NO_UPDATES_PLACEHOLDER)
            }
            SlotWrite::Updates(kind, UpdateList::Cards(cards)) => {
                write!(f, "{} updates: {} entries", kind, cards.len())
            }
            SlotWrite::LastUpdated(when) => write!(f, "last updated = {}", when),
            SlotWrite::RefreshControl(state) => write!(f, "refresh control = {}", state),
            SlotWrite::Notice(Some(notice)) => write!(f, "notice = {}", notice),
            SlotWrite::Notice(None) => write!(f, "notice cleared"),
        }
    }
}

/// Where the controller writes its output.
pub trait DisplaySurface: Send + Sync {
    fn write(&self, write: SlotWrite);
}

/// Current value of every display slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    counters: [Option<String>; 5],
    company: Option<UpdateList>,
    site: Option<UpdateList>,
    last_updated: Option<String>,
    control: ControlState,
    notice: Option<String>,
}

impl Board {
    pub fn apply(&mut self, write: SlotWrite) {
        match write {
            SlotWrite::Counter(counter, value) => self.counters[counter.index()] = Some(value),
            SlotWrite::Updates(FeedKind::Company, list) => self.company = Some(list),
            SlotWrite::Updates(FeedKind::Site, list) => self.site = Some(list),
            SlotWrite::LastUpdated(when) => self.last_updated = Some(when),
            SlotWrite::RefreshControl(state) => self.control = state,
            SlotWrite::Notice(notice) => self.notice = notice,
        }
    }

    /// `None` until the first load writes the slot.
    pub fn counter(&self, counter: Counter) -> Option<&str> {
        self.counters[counter.index()].as_deref()
    }

    pub fn updates(&self, kind: FeedKind) -> Option<&UpdateList> {
        match kind {
            FeedKind::Company => self.company.as_ref(),
            FeedKind::Site => self.site.as_ref(),
        }
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    pub fn control(&self) -> ControlState {
        self.control
    }

    pub fn is_refreshing(&self) -> bool {
        self.control == ControlState::Refreshing
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Last updated: {}", self.last_updated().unwrap_or("-"))?;
        for counter in Counter::ALL {
            writeln!(f, "{}: {}", counter, self.counter(counter).unwrap_or("-"))?;
        }
        for kind in [FeedKind::Company, FeedKind::Site] {
            writeln!(f, "{} Updates:", kind)?;
            match self.updates(kind) {
                Some(list) => {
                    for line in list.to_string().lines() {
                        writeln!(f, "  {}", line)?;
                    }
                }
                None => writeln!(f, "  -")?,
            }
        }
        if let Some(notice) = self.notice() {
            writeln!(f, "Notice: {}", notice)?;
        }
        Ok(())
    }
}

/// A board shared between the controller and whoever draws it.
#[derive(Debug, Clone, Default)]
pub struct SharedBoard {
    inner: Arc<Mutex<Board>>,
}

impl SharedBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current slot values.
    pub fn snapshot(&self) -> Board {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Board> {
        // A panic while holding the lock cannot leave a slot half-written.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DisplaySurface for SharedBoard {
    fn write(&self, write: SlotWrite) {
        self.lock().apply(write);
    }
}

/// Prints every slot write, then applies it to a board.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSurface {
    board: SharedBoard,
}

impl ConsoleSurface {
    pub fn new(board: SharedBoard) -> Self {
        Self { board }
    }
}

impl DisplaySurface for ConsoleSurface {
    fn write(&self, write: SlotWrite) {
        println!("\x1b[1;36m[SLOT]\x1b[0m {}", write);
        self.board.write(write);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::render::{feed_slots, metric_slots};
    use crate::fallback::{sample_metrics, sample_updates};

    #[test]
    fn board_starts_empty_and_idle() {
        let board = Board::default();
        assert_eq!(board.counter(Counter::CopperRuns), None);
        assert_eq!(board.updates(FeedKind::Site), None);
        assert_eq!(board.control(), ControlState::Idle);
        assert!(board.notice().is_none());
    }

    #[test]
    fn last_write_to_a_slot_wins() {
        let mut board = Board::default();
        board.apply(SlotWrite::Counter(Counter::FiberRuns, "1".to_string()));
        board.apply(SlotWrite::Counter(Counter::FiberRuns, "2".to_string()));
        board.apply(SlotWrite::Notice(Some("down".to_string())));
        board.apply(SlotWrite::Notice(None));
        assert_eq!(board.counter(Counter::FiberRuns), Some("2"));
        assert!(board.notice().is_none());
    }

    #[test]
    fn shared_board_snapshots_are_independent() {
        let shared = SharedBoard::new();
        shared.write(SlotWrite::RefreshControl(ControlState::Refreshing));
        let before = shared.snapshot();
        shared.write(SlotWrite::RefreshControl(ControlState::Idle));
        assert!(before.is_refreshing());
        assert!(!shared.snapshot().is_refreshing());
    }

    #[test]
    fn board_prints_as_plain_text() {
        let mut board = Board::default();
        for write in metric_slots(&sample_metrics())
            .into_iter()
            .chain(feed_slots(&sample_updates()))
        {
            board.apply(write);
        }
        board.apply(SlotWrite::Updates(FeedKind::Site, UpdateList::Placeholder));

        let text = board.to_string();
        assert!(text.contains("Copper Runs: 45"));
        assert!(text.contains("Errors / Rework: 3"));
        assert!(text.contains("  Jan 3, 2026 | Safety Training Reminder"));
        assert!(text.contains("Site Updates:\n  No updates available"));
        assert!(!text.contains("Notice:"));
    }
}
