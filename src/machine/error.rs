//! Errors returned by state machine operations.

use crate::core::Identifier;
use thiserror::Error;

/// Errors that can occur when changing state.
///
/// Both kinds are recoverable: the machine is left exactly as it was.
/// The offending identifiers are carried with their own types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError<S: Identifier = String, E: Identifier = String> {
    /// The requested state is not declared in the configuration
    #[error("the state is not set: '{}' is not declared", .state.name())]
    InvalidState { state: S },

    /// The current state has no transition for the event
    #[error("the state is not set: no transition '{}' from '{}'", .event.name(), .from.name())]
    InvalidTransition { from: S, event: E },
}
