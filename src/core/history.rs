//! Run history tracking.
//!
//! Tracks the steps an automaton instance has taken, one entry per
//! consumed input action.

use super::symbol::Symbol;
use chrono::{DateTime, Utc};
use std::collections::vec_deque::{self, VecDeque};
use std::time::Duration;

/// Record of a single consumed input action.
///
/// # Example
///
/// ```rust
/// use fsa::core::Step;
/// use chrono::Utc;
///
/// let step = Step {
///     from: 1,
///     action: "a",
///     to: 2,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(step.to, 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Step<S: Symbol, A: Symbol> {
    /// The state the action was consumed in
    pub from: S,
    /// The consumed input action
    pub action: A,
    /// The state the transition led to
    pub to: S,
    /// When the step was taken
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of steps.
///
/// The public API is immutable - `record` returns a new history with the
/// step appended and leaves the original untouched. The owning automaton
/// appends in place so a step costs the same however long the run is.
///
/// # Example
///
/// ```rust
/// use fsa::core::{RunHistory, Step};
/// use chrono::Utc;
///
/// let history = RunHistory::new();
///
/// let history = history.record(Step {
///     from: 1,
///     action: 'a',
///     to: 2,
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(Step {
///     from: 2,
///     action: 'b',
///     to: 3,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path();
/// assert_eq!(path, vec![&1, &2, &3]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RunHistory<S: Symbol, A: Symbol> {
    steps: VecDeque<Step<S, A>>,
}

impl<S: Symbol, A: Symbol> Default for RunHistory<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol, A: Symbol> RunHistory<S, A> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            steps: VecDeque::new(),
        }
    }

    /// Record a step, returning a new history.
    pub fn record(&self, step: Step<S, A>) -> Self {
        let mut history = self.clone();
        history.push(step, None);
        history
    }

    /// Keep only the `limit` most recent steps, returning a new history.
    pub fn retain_last(&self, limit: usize) -> Self {
        let skip = self.steps.len().saturating_sub(limit);
        Self {
            steps: self.steps.iter().skip(skip).cloned().collect(),
        }
    }

    /// Append a step in place, dropping the oldest steps beyond `limit`.
    pub(crate) fn push(&mut self, step: Step<S, A>, limit: Option<usize>) {
        self.steps.push_back(step);
        if let Some(limit) = limit {
            self.trim(limit);
        }
    }

    /// Drop the oldest steps in place until at most `limit` remain.
    pub(crate) fn trim(&mut self, limit: usize) {
        while self.steps.len() > limit {
            self.steps.pop_front();
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first step followed by the `to`
    /// state of every step. Empty when nothing has been recorded.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.front() {
            path.push(&first.from);
        }
        for step in &self.steps {
            path.push(&step.to);
        }
        path
    }

    /// Get the consumed input actions in order.
    pub fn actions(&self) -> Vec<&A> {
        self.steps.iter().map(|step| &step.action).collect()
    }

    /// Time between the first and the last recorded step.
    ///
    /// Returns `None` if there are no steps.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.steps.front(), self.steps.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Recorded steps, oldest first.
    pub fn steps(&self) -> vec_deque::Iter<'_, Step<S, A>> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
