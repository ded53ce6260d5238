//! Core automaton types.
//!
//! This module contains the building blocks shared by the automaton and
//! its builder:
//! - Identifier requirements via the `Symbol` trait
//! - The run lifecycle via `InstanceStatus`
//! - Immutable run history tracking

mod history;
mod status;
mod symbol;

pub use history::{RunHistory, Step};
pub use status::InstanceStatus;
pub use symbol::Symbol;
