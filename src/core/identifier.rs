//! Identifier trait for state and event names.
//!
//! States and events are opaque, comparable labels. The machine never looks
//! inside them; it only compares, orders and displays them.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state and event identifiers.
///
/// # Required Traits
///
/// - `Clone`: identifiers are copied into history entries
/// - `Eq` + `Hash`: identifiers key the transition tables
/// - `Ord`: identifiers can be sorted for display
/// - `Debug`: identifiers are debuggable for diagnostics
/// - `Serialize` + `DeserializeOwned`: configurations are loaded from JSON
///
/// `String` implements this trait, and the [`identifier_enum!`](crate::identifier_enum)
/// macro generates closed enums that do.
///
/// # Example
///
/// ```rust
/// use waypoint::core::Identifier;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
/// enum Light {
///     Red,
///     Green,
/// }
///
/// impl Identifier for Light {
///     fn name(&self) -> &str {
///         match self {
///             Self::Red => "red",
///             Self::Green => "green",
///         }
///     }
/// }
///
/// assert_eq!(Light::Red.name(), "red");
/// ```
pub trait Identifier:
    Clone + Eq + Hash + Ord + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Get the identifier's name for display/logging.
    fn name(&self) -> &str;
}

impl Identifier for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
