//! Tunable machine behavior.

use serde::{Deserialize, Serialize};

/// What [`StateMachine::reset`](crate::StateMachine::reset) does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetMode {
    /// Record the initial state as a new history entry, undoable like any change
    #[default]
    Record,

    /// Leave the machine untouched
    Ignore,
}

/// Options applied to a single machine.
///
/// Deserializable with every field optional, so it can live alongside a
/// configuration document:
///
/// ```rust
/// use waypoint::{MachineOptions, ResetMode};
///
/// let options: MachineOptions = serde_json::from_str(r#"{ "reset": "ignore" }"#).unwrap();
/// assert_eq!(options.reset, ResetMode::Ignore);
/// assert_eq!(options.history_limit, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineOptions {
    pub reset: ResetMode,

    /// Maximum number of history entries kept; `None` keeps everything
    pub history_limit: Option<usize>,
}

impl MachineOptions {
    pub fn reset(mut self, mode: ResetMode) -> Self {
        self.reset = mode;
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }
}
