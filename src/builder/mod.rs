//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder that validates a whole definition
//! in one pass, and a macro for declaring state and action enums.

pub mod automaton;
pub mod macros;

pub use automaton::AutomatonBuilder;
