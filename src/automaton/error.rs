//! Automaton error types.

use thiserror::Error;

/// Coarse classification of an [`AutomatonError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required identifier was absent
    InvalidArgument,
    /// A state, action or transition has not been registered
    NotFound,
    /// The operation is not valid in the current lifecycle phase
    IllegalState,
}

/// Errors that can occur when defining or running an automaton.
///
/// Identifiers are carried in their `Debug` rendering so the error type
/// does not depend on the automaton's state and action types.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("'None' is not an accepted value for {what}")]
    InvalidArgument { what: &'static str },

    #[error("State '{state}' does not exist")]
    StateNotFound { state: String },

    #[error("Input action '{action}' does not exist")]
    ActionNotFound { action: String },

    #[error("State '{state}' does not have action '{action}'")]
    TransitionNotFound { state: String, action: String },

    #[error("Instance already ended at state '{end_state}'")]
    AlreadyEnded { end_state: String },

    #[error("No initial state designated")]
    NoInitialState,

    #[error("No current state to advance from")]
    NoCurrentState,

    #[error("State '{state}' is not a final state")]
    NotFinal { state: String },

    #[error("Definition is frozen while the instance is {status}")]
    DefinitionFrozen { status: String },
}

impl AutomatonError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::StateNotFound { .. }
            | Self::ActionNotFound { .. }
            | Self::TransitionNotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyEnded { .. }
            | Self::NoInitialState
            | Self::NoCurrentState
            | Self::NotFinal { .. }
            | Self::DefinitionFrozen { .. } => ErrorKind::IllegalState,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_illegal_state(&self) -> bool {
        self.kind() == ErrorKind::IllegalState
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

/// Result type alias using [`AutomatonError`]
pub type Result<T> = std::result::Result<T, AutomatonError>;
