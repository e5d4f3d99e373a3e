//! Builder for constructing configurations in code.

use crate::config::error::ConfigError;
use crate::config::{Configuration, StateDefinition};
use crate::core::Identifier;
use indexmap::IndexMap;

/// Builder for a single state's outgoing transitions.
pub struct StateBuilder<S: Identifier, E: Identifier> {
    transitions: IndexMap<E, S>,
}

impl<S: Identifier, E: Identifier> StateBuilder<S, E> {
    /// Create a builder for a state with no transitions yet.
    pub fn new() -> Self {
        Self {
            transitions: IndexMap::new(),
        }
    }

    /// React to `event` by moving to `to`. A later call for the same event wins
    /// but keeps the event's original position.
    pub fn on(mut self, event: E, to: S) -> Self {
        self.transitions.insert(event, to);
        self
    }

    pub fn build(self) -> StateDefinition<S, E> {
        StateDefinition {
            transitions: self.transitions,
        }
    }
}

impl<S: Identifier, E: Identifier> Default for StateBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Identifier, E: Identifier> From<StateDefinition<S, E>> for StateBuilder<S, E> {
    fn from(definition: StateDefinition<S, E>) -> Self {
        Self {
            transitions: definition.transitions,
        }
    }
}

/// Builder for constructing configurations with a fluent API.
///
/// # Example
///
/// ```rust
/// use waypoint::config::ConfigurationBuilder;
///
/// let config = ConfigurationBuilder::<String, String>::new()
///     .initial("draft".into())
///     .state("draft".into(), |s| s.on("submit".into(), "review".into()))
///     .state("review".into(), |s| {
///         s.on("approve".into(), "published".into())
///             .on("reject".into(), "draft".into())
///     })
///     .declare("published".into())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.states().len(), 3);
/// ```
pub struct ConfigurationBuilder<S: Identifier, E: Identifier> {
    initial: Option<S>,
    states: IndexMap<S, StateDefinition<S, E>>,
}

impl<S: Identifier, E: Identifier> ConfigurationBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: IndexMap::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare a state and define its transitions.
    ///
    /// Declaring the same state again extends its existing transitions and
    /// keeps its original position.
    pub fn state<F>(mut self, state: S, define: F) -> Self
    where
        F: FnOnce(StateBuilder<S, E>) -> StateBuilder<S, E>,
    {
        let slot = self.states.entry(state).or_default();
        let existing = std::mem::take(slot);
        *slot = define(StateBuilder::from(existing)).build();
        self
    }

    /// Declare a state without adding transitions.
    pub fn declare(self, state: S) -> Self {
        self.state(state, |s| s)
    }

    /// Add a single transition, declaring `from` if needed.
    pub fn transition(self, from: S, event: E, to: S) -> Self {
        self.state(from, |s| s.on(event, to))
    }

    /// Build and validate the configuration.
    /// Returns an error if the initial state is missing or the table is inconsistent.
    pub fn build(self) -> Result<Configuration<S, E>, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitialState)?;

        let config = Configuration::new(initial, self.states);
        config.validate()?;

        Ok(config)
    }
}

impl<S: Identifier, E: Identifier> Default for ConfigurationBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
