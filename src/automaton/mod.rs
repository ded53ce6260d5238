//! The automaton: definition plus one run instance.
//!
//! # Key Concepts
//!
//! - **Definition**: states, final states, input actions and a deterministic
//!   transition table, all registered explicitly before use
//! - **Run**: a current state advanced by `do_action` and finalized by
//!   `end_instance` at a final state
//! - **Status**: `created` → `running` → `ended`, where `ended` is terminal
//!
//! Every operation is synchronous and either fully succeeds or leaves the
//! automaton unchanged.

mod config;
mod describe;
mod error;
mod machine;

pub use config::{AutomatonConfig, DEFAULT_HISTORY_LIMIT};
pub use error::{AutomatonError, ErrorKind, Result};
pub use machine::Automaton;
