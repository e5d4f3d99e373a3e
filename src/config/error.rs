//! Configuration errors.

use thiserror::Error;

/// A single problem found while validating a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("No states declared")]
    NoStates,

    #[error("Initial state '{initial}' is not declared")]
    UnknownInitialState { initial: String },

    #[error("Transition '{event}' from '{from}' targets undeclared state '{to}'")]
    UnknownTarget {
        from: String,
        event: String,
        to: String,
    },
}

/// Errors that can occur when loading or building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    /// Every violation found, in discovery order
    #[error("Invalid configuration: {}", summarize(.0))]
    Invalid(Vec<ConfigViolation>),
}

impl ConfigError {
    /// Violations carried by an `Invalid` error; empty for other kinds.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::Invalid(violations) => violations,
            _ => &[],
        }
    }
}

fn summarize(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
