//! Core identifier and history types.
//!
//! This module contains the pieces the state machine is assembled from:
//! - Identifier definitions via the `Identifier` trait
//! - Linear undo/redo history with a cursor
//!
//! Nothing in this module knows about configurations or transition tables.

mod history;
mod identifier;

pub use history::{Cause, Entry, History};
pub use identifier::Identifier;
