//! Lifecycle status of an automaton instance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle tag of a single run.
///
/// `Created` moves to `Running` on the first successful action and to
/// `Ended` once the run is finalized at a final state. `Ended` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceStatus {
    /// Constructed, no action consumed yet
    #[default]
    Created,
    /// At least one action has been consumed
    Running,
    /// Finalized; no further actions are accepted
    Ended,
}

impl InstanceStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Running => "running",
            Self::Ended => "ended",
        }
    }

    /// Check if the run has been finalized.
    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended)
    }
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_created() {
        assert_eq!(InstanceStatus::default(), InstanceStatus::Created);
    }

    #[test]
    fn names_are_lowercase_tags() {
        assert_eq!(InstanceStatus::Created.to_string(), "created");
        assert_eq!(InstanceStatus::Running.to_string(), "running");
        assert_eq!(InstanceStatus::Ended.to_string(), "ended");
    }

    #[test]
    fn only_ended_is_ended() {
        assert!(!InstanceStatus::Created.is_ended());
        assert!(!InstanceStatus::Running.is_ended());
        assert!(InstanceStatus::Ended.is_ended());
    }

    #[test]
    fn status_serializes_as_tag() {
        let json = serde_json::to_string(&InstanceStatus::Running).unwrap();
        assert_eq!(json, "\"running\"");

        let parsed: InstanceStatus = serde_json::from_str("\"ended\"").unwrap();
        assert_eq!(parsed, InstanceStatus::Ended);
    }
}
