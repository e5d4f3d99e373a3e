//! Configuration-driven state machine with undo/redo.
//!
//! The machine holds a shared, read-only [`Configuration`] and a
//! [`History`] of the states it has entered. Every successful change is
//! recorded; `undo` and `redo` only move the history cursor.

mod error;
mod options;

pub use error::MachineError;
pub use options::{MachineOptions, ResetMode};

use crate::config::{ConfigError, Configuration};
use crate::core::{Cause, History, Identifier};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Finite-state machine over a shared transition table.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use waypoint::{Configuration, StateMachine};
///
/// let config: Configuration = Configuration::from_json_str(r#"{
///     "initial": "normal",
///     "states": {
///         "normal": { "transitions": { "study": "busy" } },
///         "busy":   { "transitions": { "get_up": "normal" } }
///     }
/// }"#).unwrap();
///
/// let mut machine = StateMachine::new(Arc::new(config)).unwrap();
/// machine.trigger("study".into()).unwrap();
/// assert_eq!(machine.state(), "busy");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "normal");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "busy");
/// ```
#[derive(Debug)]
pub struct StateMachine<S: Identifier = String, E: Identifier = String> {
    id: Uuid,
    config: Arc<Configuration<S, E>>,
    options: MachineOptions,
    history: History<S, E>,
}

impl<S: Identifier, E: Identifier> StateMachine<S, E> {
    /// Create a machine in the configuration's initial state.
    ///
    /// Fails if the configuration does not validate.
    pub fn new(config: Arc<Configuration<S, E>>) -> Result<Self, ConfigError> {
        Self::with_options(config, MachineOptions::default())
    }

    /// Create a machine with explicit options.
    pub fn with_options(
        config: Arc<Configuration<S, E>>,
        options: MachineOptions,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let id = Uuid::new_v4();
        let history = History::with_limit(config.initial().clone(), options.history_limit);
        info!(
            machine = %id,
            initial = config.initial().name(),
            reset = ?options.reset,
            history_limit = ?options.history_limit,
            "state machine created"
        );

        Ok(Self {
            id,
            config,
            options,
            history,
        })
    }

    /// Identifier used to tell machines apart in logs.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The shared configuration this machine runs on.
    pub fn config(&self) -> &Arc<Configuration<S, E>> {
        &self.config
    }

    /// Options the machine was created with.
    pub fn options(&self) -> &MachineOptions {
        &self.options
    }

    /// Get the active state.
    pub fn state(&self) -> &S {
        self.history.state()
    }

    /// Get the full history, including any redo tail.
    pub fn history(&self) -> &History<S, E> {
        &self.history
    }

    /// Move to `state` regardless of the transition table.
    ///
    /// Discards any redo tail. Fails with [`MachineError::InvalidState`] if
    /// `state` is not declared, leaving the machine unchanged.
    pub fn change_state(&mut self, state: S) -> Result<(), MachineError<S, E>> {
        if !self.config.contains(&state) {
            warn!(machine = %self.id, state = state.name(), "rejected undeclared state");
            return Err(MachineError::InvalidState { state });
        }

        self.enter(state, Cause::Changed);
        Ok(())
    }

    /// Follow the transition for `event` from the active state.
    ///
    /// Returns a copy of the new active state. Fails with
    /// [`MachineError::InvalidTransition`] if the active state does not react
    /// to `event`, leaving the machine unchanged.
    pub fn trigger(&mut self, event: E) -> Result<S, MachineError<S, E>> {
        let Some(target) = self.config.target(self.state(), &event).cloned() else {
            warn!(
                machine = %self.id,
                from = self.state().name(),
                event = event.name(),
                "rejected event without transition"
            );
            return Err(MachineError::InvalidTransition {
                from: self.state().clone(),
                event,
            });
        };

        self.enter(target.clone(), Cause::Triggered(event));
        Ok(target)
    }

    /// Return to the initial state according to [`ResetMode`].
    ///
    /// With `ResetMode::Record` this is an ordinary change: it discards any
    /// redo tail and can itself be undone.
    pub fn reset(&mut self) {
        match self.options.reset {
            ResetMode::Record => {
                let initial = self.config.initial().clone();
                self.enter(initial, Cause::Reset);
            }
            ResetMode::Ignore => {
                debug!(machine = %self.id, "reset ignored");
            }
        }
    }

    /// Declared states, optionally narrowed to those that react to `event`.
    pub fn states(&self, event: Option<&E>) -> Vec<S> {
        self.config.states_with_event(event)
    }

    /// Events the active state reacts to.
    pub fn events(&self) -> Vec<E> {
        self.config
            .state(self.state())
            .map(|definition| definition.events().cloned().collect())
            .unwrap_or_default()
    }

    /// Whether `trigger(event)` would succeed right now.
    pub fn can_trigger(&self, event: &E) -> bool {
        self.config.target(self.state(), event).is_some()
    }

    /// Step back to the previous state. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        if moved {
            debug!(machine = %self.id, to = self.state().name(), "undo");
        }
        moved
    }

    /// Step forward to the next recorded state. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        if moved {
            debug!(machine = %self.id, to = self.state().name(), "redo");
        }
        moved
    }

    /// Whether `undo` would move to an earlier state.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether `redo` would move to a later state.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forget everything and return to the initial state with no undo available.
    pub fn clear_history(&mut self) {
        self.history.restart(self.config.initial().clone());
        debug!(machine = %self.id, "history cleared");
    }

    fn enter(&mut self, state: S, cause: Cause<E>) {
        debug!(
            machine = %self.id,
            from = self.state().name(),
            to = state.name(),
            cause = ?cause,
            "state changed"
        );

        let evicted = self.history.record(state, cause);
        if evicted > 0 {
            debug!(machine = %self.id, evicted, "history limit reached, dropped oldest entries");
        }
    }
}
