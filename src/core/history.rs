//! Linear undo/redo history of entered states.
//!
//! History is a single ordered sequence plus a cursor. Undo moves the cursor
//! left, redo moves it right, and recording a new state drops everything to
//! the right of the cursor before appending.

use super::identifier::Identifier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a history entry came to be recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum Cause<E: Identifier> {
    /// The configuration's initial state, entered on construction or clear
    Initial,
    /// Direct relabeling via `change_state`
    Changed,
    /// Transition taken in response to this event
    Triggered(E),
    /// Return to the initial state via `reset`
    Reset,
}

/// A single state the machine has occupied.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{Cause, Entry};
/// use chrono::Utc;
///
/// let entry: Entry<String, String> = Entry {
///     state: "busy".to_string(),
///     cause: Cause::Triggered("study".to_string()),
///     entered_at: Utc::now(),
/// };
/// assert_eq!(entry.state, "busy");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Entry<S: Identifier, E: Identifier> {
    /// The state entered
    pub state: S,
    /// Why it was entered
    pub cause: Cause<E>,
    /// When it was entered
    pub entered_at: DateTime<Utc>,
}

impl<S: Identifier, E: Identifier> Entry<S, E> {
    fn now(state: S, cause: Cause<E>) -> Self {
        Self {
            state,
            cause,
            entered_at: Utc::now(),
        }
    }
}

/// Ordered history of entered states with an active cursor.
///
/// Always holds at least one entry, and `cursor < entries().len()`.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{Cause, History};
///
/// let mut history: History<String, String> = History::new("normal".to_string());
/// history.record("busy".to_string(), Cause::Triggered("study".to_string()));
/// history.record("hungry".to_string(), Cause::Triggered("get_hungry".to_string()));
///
/// assert!(history.undo());
/// assert_eq!(history.state(), "busy");
///
/// // Recording after an undo discards the redo branch
/// history.record("sleeping".to_string(), Cause::Changed);
/// assert!(!history.redo());
///
/// let path = history.path();
/// assert_eq!(path, vec!["normal", "busy", "sleeping"]);
/// ```
#[derive(Clone, Debug)]
pub struct History<S: Identifier, E: Identifier> {
    entries: Vec<Entry<S, E>>,
    cursor: usize,
    limit: Option<usize>,
}

impl<S: Identifier, E: Identifier> History<S, E> {
    /// Create an unbounded history starting at `initial`.
    pub fn new(initial: S) -> Self {
        Self::with_limit(initial, None)
    }

    /// Create a history that keeps at most `limit` entries.
    ///
    /// When a record would exceed the limit, the oldest entries are dropped.
    /// A limit of zero is treated as one, since the active entry is always kept.
    pub fn with_limit(initial: S, limit: Option<usize>) -> Self {
        Self {
            entries: vec![Entry::now(initial, Cause::Initial)],
            cursor: 0,
            limit: limit.map(|n| n.max(1)),
        }
    }

    /// Get the active entry.
    pub fn current(&self) -> &Entry<S, E> {
        &self.entries[self.cursor]
    }

    /// Get the active state.
    pub fn state(&self) -> &S {
        &self.current().state
    }

    /// Record a newly entered state.
    ///
    /// Truncates any entries after the cursor, appends the new entry and
    /// moves the cursor onto it. Returns how many of the oldest entries were
    /// evicted to stay within the limit.
    pub fn record(&mut self, state: S, cause: Cause<E>) -> usize {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(Entry::now(state, cause));
        self.cursor = self.entries.len() - 1;

        let evicted = match self.limit {
            Some(limit) if self.entries.len() > limit => self.entries.len() - limit,
            _ => 0,
        };
        if evicted > 0 {
            self.entries.drain(..evicted);
            self.cursor -= evicted;
        }
        evicted
    }

    /// Move the cursor one entry back. Returns `false` at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor one entry forward. Returns `false` at the newest entry.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Whether an earlier entry exists.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether a later entry exists.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Discard everything and start over with a single `initial` entry.
    pub fn restart(&mut self, initial: S) {
        self.entries.clear();
        self.entries.push(Entry::now(initial, Cause::Initial));
        self.cursor = 0;
    }

    /// Index of the active entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Configured entry limit, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// All recorded entries in chronological order, including any redo tail.
    pub fn entries(&self) -> &[Entry<S, E>] {
        &self.entries
    }

    /// States along the whole timeline, oldest first.
    pub fn path(&self) -> Vec<&S> {
        self.entries.iter().map(|entry| &entry.state).collect()
    }

    /// Time elapsed between the oldest and newest entries.
    ///
    /// Returns `None` if the clock went backwards between them.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        last.entered_at
            .signed_duration_since(first.entered_at)
            .to_std()
            .ok()
    }
}
