//! In-game event log.
//!
//! The log is append-only: entries are pushed and never edited. It is
//! backed by `im::Vector` so each snapshot can hold the full log with an
//! O(1) clone.

use im::Vector;
use serde::{Deserialize, Serialize};

/// What kind of event an entry describes. Presenters color by this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogCategory {
    Info,
    Combat,
    Level,
    Magic,
}

/// A single log line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
    pub category: LogCategory,
}

impl LogEntry {
    #[must_use]
    pub fn new(message: impl Into<String>, category: LogCategory) -> Self {
        Self {
            message: message.into(),
            category,
        }
    }
}

/// Ordered, append-only sequence of log entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    entries: Vector<LogEntry>,
}

impl GameLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, message: impl Into<String>, category: LogCategory) {
        let entry = LogEntry::new(message, category);
        log::trace!("game log [{:?}] {}", entry.category, entry.message);
        self.entries.push_back(entry);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Iterate oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Entries of one category, oldest first.
    pub fn of_category(&self, category: LogCategory) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }
}
