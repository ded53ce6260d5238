//! FSA: a deterministic finite-state automaton engine
//!
//! An automaton is defined by an explicit set of states, an explicit
//! alphabet of input actions and a transition table mapping each
//! `(state, action)` pair to exactly one successor. One run walks the
//! automaton by consuming actions until it is finalized at a final state.
//!
//! # Core Concepts
//!
//! - **Symbol**: states and actions are any `Clone + Eq + Hash + Debug` type
//! - **Automaton**: definition and run in one value, see [`Automaton`]
//! - **Status**: `created` → `running` → `ended`
//! - **History**: every consumed action is recorded as a [`Step`](core::Step)
//!
//! # Example
//!
//! ```rust
//! use fsa::{Automaton, ErrorKind, InstanceStatus};
//!
//! let mut fsa = Automaton::with_definition("1", Some(1), Some([2]), [3], ["a", "b", "c"])
//!     .unwrap();
//! fsa.link_states(1, "a", 2).unwrap();
//! fsa.link_states(2, "b", 3).unwrap();
//! fsa.link_states(3, "c", 1).unwrap();
//!
//! fsa.do_action(&"a").unwrap();
//! fsa.do_action(&"b").unwrap();
//! assert_eq!(fsa.current_state(), Some(&3));
//! assert_eq!(fsa.status(), InstanceStatus::Running);
//!
//! fsa.end_instance().unwrap();
//! assert_eq!(fsa.status(), InstanceStatus::Ended);
//!
//! let err = fsa.do_action(&"c").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::IllegalState);
//! ```

pub mod automaton;
pub mod builder;
pub mod core;

// Re-export commonly used types
pub use automaton::{Automaton, AutomatonConfig, AutomatonError, ErrorKind};
pub use builder::AutomatonBuilder;
pub use crate::core::{InstanceStatus, RunHistory, Step, Symbol};
