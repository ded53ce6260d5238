//! Automaton configuration.
//!
//! Settings are plain serde values so callers can keep them next to their
//! own configuration and load them from JSON.

use serde::{Deserialize, Serialize};

/// Number of recent steps kept by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// Run-time behaviour switches for an [`Automaton`](super::Automaton).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomatonConfig {
    /// Reject definition edits (states, actions, links, initial state)
    /// once the instance has left the `created` status.
    pub freeze_definition_when_running: bool,

    /// Record every successful step in the run history.
    pub record_history: bool,

    /// Keep at most this many recent steps. `None` keeps everything, so
    /// memory then grows with the length of the run.
    pub history_limit: Option<usize>,
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            freeze_definition_when_running: false,
            record_history: true,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }
}

impl AutomatonConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn frozen() -> Self {
        Self {
            freeze_definition_when_running: true,
            ..Self::default()
        }
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    pub fn with_unbounded_history(mut self) -> Self {
        self.history_limit = None;
        self
    }

    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }
}
