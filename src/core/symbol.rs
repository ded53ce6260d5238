//! Identifier trait shared by states and input actions.
//!
//! The engine never looks inside a state or an action. It only needs to
//! store them in sets, use them as table keys and print them in diagnostics.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton identifiers (states and input actions).
///
/// Blanket-implemented for every type that is `Clone + Eq + Hash + Debug`,
/// so integers, strings, and fieldless enums all work out of the box.
///
/// # Required Traits
///
/// - `Clone`: identifiers are copied into the definition and the history
/// - `Eq` + `Hash`: identifiers are set members and transition-table keys
/// - `Debug`: identifiers are rendered in errors and descriptions
///
/// # Example
///
/// ```rust
/// use fsa::core::Symbol;
///
/// fn accepts_symbol<T: Symbol>(_value: T) {}
///
/// accepts_symbol(1u32);
/// accepts_symbol("start");
/// accepts_symbol(String::from("end"));
/// ```
pub trait Symbol: Clone + Eq + Hash + Debug {
    /// Render the identifier for messages and descriptions.
    fn label(&self) -> String {
        format!("{self:?}")
    }
}

impl<T: Clone + Eq + Hash + Debug> Symbol for T {}
