//! Waypoint: a configuration-driven finite-state machine with undo/redo
//!
//! A machine tracks one active state out of a fixed, named set, moves
//! between states when events fire according to a transition table, and
//! keeps a linear history that can be walked back and forth.
//!
//! # Core Concepts
//!
//! - **Identifier**: Opaque state/event labels via the `Identifier` trait
//! - **Configuration**: Immutable transition table, loaded from JSON or built in code
//! - **History**: Entered states plus a cursor; undo/redo only move the cursor
//! - **StateMachine**: Ties a shared configuration to one history
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use waypoint::{Configuration, StateMachine};
//!
//! let config: Configuration = Configuration::from_json_str(r#"{
//!     "initial": "normal",
//!     "states": {
//!         "normal":   { "transitions": { "study": "busy" } },
//!         "busy":     { "transitions": { "get_tired": "sleeping", "get_hungry": "hungry" } },
//!         "hungry":   { "transitions": { "eat": "normal" } },
//!         "sleeping": { "transitions": { "get_hungry": "hungry", "get_up": "normal" } }
//!     }
//! }"#).unwrap();
//!
//! let mut machine = StateMachine::new(Arc::new(config)).unwrap();
//!
//! machine.trigger("study".into()).unwrap();
//! machine.trigger("get_hungry".into()).unwrap();
//! assert_eq!(machine.state(), "hungry");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "busy");
//!
//! // A new change discards whatever could have been redone
//! machine.trigger("get_tired".into()).unwrap();
//! assert!(!machine.redo());
//! ```

pub mod config;
pub mod core;
pub mod machine;
mod macros;

// Re-export commonly used types
pub use crate::config::{ConfigError, ConfigViolation, Configuration, ConfigurationBuilder};
pub use crate::core::{Cause, Entry, History, Identifier};
pub use crate::machine::{MachineError, MachineOptions, ResetMode, StateMachine};
