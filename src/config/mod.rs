//! Transition configuration.
//!
//! A configuration names the initial state and, for every declared state,
//! the events it reacts to and where each one leads. It is a plain value:
//! build it in code with [`ConfigurationBuilder`] or load it from JSON.
//!
//! ```json
//! {
//!   "initial": "normal",
//!   "states": {
//!     "normal": { "transitions": { "study": "busy" } },
//!     "busy":   { "transitions": { "get_tired": "sleeping" } },
//!     "sleeping": {}
//!   }
//! }
//! ```
//!
//! Validation uses Stillwater's `Validation` so that every problem in a
//! configuration is reported at once rather than one per load attempt.

use crate::core::Identifier;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io::Read;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

pub mod builder;
pub mod error;

pub use builder::{ConfigurationBuilder, StateBuilder};
pub use error::{ConfigError, ConfigViolation};

/// Outgoing transitions of a single state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateDefinition<S: Identifier, E: Identifier> {
    /// Event to destination state
    #[serde(default)]
    pub transitions: IndexMap<E, S>,
}

impl<S: Identifier, E: Identifier> StateDefinition<S, E> {
    /// A state with no outgoing transitions.
    pub fn new() -> Self {
        Self {
            transitions: IndexMap::new(),
        }
    }

    /// Destination for `event`, if this state reacts to it.
    pub fn target(&self, event: &E) -> Option<&S> {
        self.transitions.get(event)
    }

    /// Events this state reacts to, in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &E> {
        self.transitions.keys()
    }
}

impl<S: Identifier, E: Identifier> Default for StateDefinition<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable transition table shared by any number of machines.
///
/// `S` is the state identifier type and `E` the event identifier type;
/// both default to `String`.
///
/// # Example
///
/// ```rust
/// use waypoint::config::Configuration;
///
/// let config: Configuration = Configuration::from_json_str(r#"{
///     "initial": "off",
///     "states": {
///         "off": { "transitions": { "toggle": "on" } },
///         "on":  { "transitions": { "toggle": "off" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.initial(), "off");
/// assert_eq!(config.target(&"on".to_string(), &"toggle".to_string()).unwrap(), "off");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Configuration<S: Identifier = String, E: Identifier = String> {
    initial: S,
    states: IndexMap<S, StateDefinition<S, E>>,
}

impl<S: Identifier, E: Identifier> Configuration<S, E> {
    /// Assemble a configuration without validating it.
    ///
    /// Call [`validate`](Self::validate) before relying on it, or let
    /// [`StateMachine::new`](crate::StateMachine::new) do so.
    pub fn new(initial: S, states: IndexMap<S, StateDefinition<S, E>>) -> Self {
        Self { initial, states }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.loaded()
    }

    /// Parse and validate a JSON configuration from raw bytes.
    pub fn from_json_slice(json: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_slice(json)?;
        config.loaded()
    }

    /// Parse and validate a JSON configuration from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_reader(reader)?;
        config.loaded()
    }

    fn loaded(self) -> Result<Self, ConfigError> {
        self.validate()?;
        debug!(
            initial = self.initial.name(),
            states = self.states.len(),
            "configuration loaded"
        );
        Ok(self)
    }

    /// Check the configuration, accumulating ALL violations.
    ///
    /// Returns `Validation::Success(())` if the configuration is well formed,
    /// otherwise `Validation::Failure` with every violation found.
    pub fn check(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        let initial = if self.states.is_empty() {
            Validation::fail(ConfigViolation::NoStates)
        } else if !self.contains(&self.initial) {
            Validation::fail(ConfigViolation::UnknownInitialState {
                initial: self.initial.name().to_string(),
            })
        } else {
            Validation::success(())
        };
        checks.push(initial);

        for (from, definition) in &self.states {
            for (event, to) in &definition.transitions {
                let check = if self.contains(to) {
                    Validation::success(())
                } else {
                    Validation::fail(ConfigViolation::UnknownTarget {
                        from: from.name().to_string(),
                        event: event.name().to_string(),
                        to: to.name().to_string(),
                    })
                };
                checks.push(check);
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate the configuration, reporting every violation in one error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.check() {
            Validation::Success(()) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// All declared states, in declaration order.
    pub fn states(&self) -> &IndexMap<S, StateDefinition<S, E>> {
        &self.states
    }

    pub fn state(&self, state: &S) -> Option<&StateDefinition<S, E>> {
        self.states.get(state)
    }

    /// Whether `state` is declared.
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }

    /// Destination of `event` from `from`, if such a transition is declared.
    pub fn target(&self, from: &S, event: &E) -> Option<&S> {
        self.state(from)?.target(event)
    }

    /// Declared states, optionally narrowed to those that react to `event`.
    ///
    /// Results keep the order in which states were declared.
    pub fn states_with_event(&self, event: Option<&E>) -> Vec<S> {
        self.states
            .iter()
            .filter(|(_, definition)| event.is_none_or(|e| definition.transitions.contains_key(e)))
            .map(|(state, _)| state.clone())
            .collect()
    }
}
