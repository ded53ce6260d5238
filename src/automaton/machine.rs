//! Deterministic automaton definition and its single run instance.

use crate::automaton::config::AutomatonConfig;
use crate::automaton::error::{AutomatonError, Result};
use crate::core::{InstanceStatus, RunHistory, Step, Symbol};
use chrono::Utc;
use std::collections::{HashMap, HashSet};

/// A deterministic finite-state automaton together with one run over it.
///
/// The definition (states, final states, alphabet, transition table) and
/// the run (current state, end state, status) live in the same value.
/// Definition edits stay allowed after the run has started unless
/// [`AutomatonConfig::freeze_definition_when_running`] is set.
///
/// # Example
///
/// ```rust
/// use fsa::{Automaton, InstanceStatus};
///
/// let mut fsa = Automaton::with_definition(
///     "door",
///     Some("closed"),
///     Some(["open"]),
///     ["locked"],
///     ["push", "pull", "lock"],
/// )
/// .unwrap();
///
/// fsa.link_states("closed", "push", "open").unwrap();
/// fsa.link_states("open", "pull", "closed").unwrap();
/// fsa.link_states("closed", "lock", "locked").unwrap();
///
/// fsa.do_action(&"push").unwrap();
/// fsa.do_action(&"pull").unwrap();
/// fsa.do_action(&"lock").unwrap();
/// fsa.end_instance().unwrap();
///
/// assert_eq!(fsa.status(), InstanceStatus::Ended);
/// assert_eq!(fsa.end_state(), Some(&"locked"));
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<S: Symbol, A: Symbol> {
    identity: String,
    initial_state: Option<S>,
    current_state: Option<S>,
    end_state: Option<S>,
    status: InstanceStatus,
    states: HashSet<S>,
    final_states: HashSet<S>,
    input_actions: HashSet<A>,
    transitions: HashMap<(S, A), S>,
    history: RunHistory<S, A>,
    config: AutomatonConfig,
}

impl<S: Symbol, A: Symbol> Automaton<S, A> {
    /// Create an automaton with an empty definition.
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            initial_state: None,
            current_state: None,
            end_state: None,
            status: InstanceStatus::Created,
            states: HashSet::new(),
            final_states: HashSet::new(),
            input_actions: HashSet::new(),
            transitions: HashMap::new(),
            history: RunHistory::new(),
            config: AutomatonConfig::default(),
        }
    }

    /// Create an automaton from initial collections.
    ///
    /// `states` must be `Some`; pass an empty collection for "no extra
    /// states". States are registered first, then final states, then
    /// actions, and finally the initial state is added to the state set.
    /// When no initial state is given, the first registered state becomes
    /// the initial state. The run starts at the initial state.
    pub fn with_definition<IS, IF, IA>(
        identity: impl Into<String>,
        initial_state: Option<S>,
        states: Option<IS>,
        final_states: IF,
        input_actions: IA,
    ) -> Result<Self>
    where
        IS: IntoIterator<Item = S>,
        IF: IntoIterator<Item = S>,
        IA: IntoIterator<Item = A>,
    {
        let states = states.ok_or(AutomatonError::InvalidArgument {
            what: "the states collection",
        })?;

        let mut automaton = Self::new(identity);
        automaton.initial_state = initial_state;

        for state in states {
            automaton.add_state(state, false)?;
        }
        for state in final_states {
            automaton.add_state(state, true)?;
        }
        for action in input_actions {
            automaton.add_input_action(action)?;
        }
        if let Some(initial) = &automaton.initial_state {
            automaton.states.insert(initial.clone());
        }
        automaton.current_state = automaton.initial_state.clone();

        tracing::debug!(
            automaton = %automaton.identity,
            states = automaton.states.len(),
            final_states = automaton.final_states.len(),
            input_actions = automaton.input_actions.len(),
            "automaton created"
        );
        Ok(automaton)
    }

    /// Replace the configuration.
    ///
    /// Recorded history is trimmed right away to a smaller `history_limit`.
    pub fn with_config(mut self, config: AutomatonConfig) -> Self {
        if let Some(limit) = config.history_limit {
            self.history.trim(limit);
        }
        self.config = config;
        self
    }

    /// Designate a registered state as the initial state.
    ///
    /// The current state is left untouched; see [`Automaton::rewind`].
    pub fn set_initial_state(&mut self, state: S) -> Result<()> {
        self.ensure_editable()?;
        if !self.states.contains(&state) {
            return Err(AutomatonError::StateNotFound {
                state: state.label(),
            });
        }
        tracing::trace!(automaton = %self.identity, state = ?state, "initial state set");
        self.initial_state = Some(state);
        Ok(())
    }

    /// Register a state, optionally marking it final.
    ///
    /// The first state registered while no initial state is designated
    /// becomes the initial state. Re-adding a state is a no-op apart from
    /// possibly marking it final.
    pub fn add_state(&mut self, state: impl Into<Option<S>>, is_final: bool) -> Result<()> {
        let state = state
            .into()
            .ok_or(AutomatonError::InvalidArgument { what: "a state" })?;
        self.ensure_editable()?;

        tracing::trace!(automaton = %self.identity, state = ?state, is_final, "state added");
        if is_final {
            self.final_states.insert(state.clone());
        }
        if self.initial_state.is_none() {
            self.initial_state = Some(state.clone());
        }
        self.states.insert(state);
        Ok(())
    }

    /// Register an input action in the alphabet.
    pub fn add_input_action(&mut self, action: impl Into<Option<A>>) -> Result<()> {
        let action = action.into().ok_or(AutomatonError::InvalidArgument {
            what: "an input action",
        })?;
        self.ensure_editable()?;

        tracing::trace!(automaton = %self.identity, action = ?action, "input action added");
        self.input_actions.insert(action);
        Ok(())
    }

    /// Define the transition `(from, action) -> to`.
    ///
    /// Fails if `from`, then `to`, then `action` is unknown. A transition
    /// already defined for `(from, action)` is replaced; its previous
    /// destination is returned.
    pub fn link_states(&mut self, from: S, action: A, to: S) -> Result<Option<S>> {
        self.ensure_editable()?;
        if !self.states.contains(&from) {
            return Err(AutomatonError::StateNotFound {
                state: from.label(),
            });
        }
        if !self.states.contains(&to) {
            return Err(AutomatonError::StateNotFound { state: to.label() });
        }
        if !self.input_actions.contains(&action) {
            return Err(AutomatonError::ActionNotFound {
                action: action.label(),
            });
        }

        tracing::trace!(
            automaton = %self.identity,
            from = ?from,
            action = ?action,
            to = ?to,
            "states linked"
        );
        Ok(self.transitions.insert((from, action), to))
    }

    /// Consume one input action and move to the linked destination.
    ///
    /// Returns the new current state. On failure nothing is changed.
    pub fn do_action(&mut self, action: &A) -> Result<&S> {
        let (from, to) = match self.resolve(action) {
            Ok(pair) => pair,
            Err(err) => {
                tracing::debug!(
                    automaton = %self.identity,
                    action = ?action,
                    error = %err,
                    "action rejected"
                );
                return Err(err);
            }
        };

        tracing::debug!(
            automaton = %self.identity,
            from = ?from,
            action = ?action,
            to = ?to,
            "transition taken"
        );
        if self.config.record_history {
            self.record_step(Step {
                from,
                action: action.clone(),
                to: to.clone(),
                timestamp: Utc::now(),
            });
        }
        self.status = InstanceStatus::Running;
        Ok(&*self.current_state.insert(to))
    }

    /// Finalize the run at the current state.
    ///
    /// The current state must be final. Afterwards every `do_action` fails.
    pub fn end_instance(&mut self) -> Result<&S> {
        let current = self
            .current_state
            .clone()
            .ok_or(AutomatonError::NoCurrentState)?;
        if !self.final_states.contains(&current) {
            return Err(AutomatonError::NotFinal {
                state: current.label(),
            });
        }

        tracing::debug!(automaton = %self.identity, end_state = ?current, "instance ended");
        self.status = InstanceStatus::Ended;
        Ok(&*self.end_state.insert(current))
    }

    /// Move the current state back to the initial state.
    ///
    /// Status and history are kept. Not allowed once the instance ended.
    pub fn rewind(&mut self) -> Result<&S> {
        self.ensure_not_ended()?;
        let initial = self
            .initial_state
            .clone()
            .ok_or(AutomatonError::NoInitialState)?;

        tracing::debug!(automaton = %self.identity, state = ?initial, "instance rewound");
        Ok(&*self.current_state.insert(initial))
    }

    /// Look up the destination for `action` without changing anything.
    fn resolve(&self, action: &A) -> Result<(S, S)> {
        self.ensure_not_ended()?;
        if self.initial_state.is_none() {
            return Err(AutomatonError::NoInitialState);
        }
        let Some(current) = &self.current_state else {
            return Err(AutomatonError::NoCurrentState);
        };
        if !self.input_actions.contains(action) {
            return Err(AutomatonError::ActionNotFound {
                action: action.label(),
            });
        }

        match self.transitions.get(&(current.clone(), action.clone())) {
            Some(to) => Ok((current.clone(), to.clone())),
            None => Err(AutomatonError::TransitionNotFound {
                state: current.label(),
                action: action.label(),
            }),
        }
    }

    fn record_step(&mut self, step: Step<S, A>) {
        self.history.push(step, self.config.history_limit);
    }

    fn ensure_not_ended(&self) -> Result<()> {
        if self.status.is_ended() {
            let end_state = self.end_state.as_ref().map_or_else(String::new, Symbol::label);
            return Err(AutomatonError::AlreadyEnded { end_state });
        }
        Ok(())
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.config.freeze_definition_when_running && self.status != InstanceStatus::Created {
            return Err(AutomatonError::DefinitionFrozen {
                status: self.status.to_string(),
            });
        }
        Ok(())
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn status(&self) -> InstanceStatus {
        self.status
    }

    pub fn initial_state(&self) -> Option<&S> {
        self.initial_state.as_ref()
    }

    pub fn current_state(&self) -> Option<&S> {
        self.current_state.as_ref()
    }

    pub fn end_state(&self) -> Option<&S> {
        self.end_state.as_ref()
    }

    pub fn states(&self) -> &HashSet<S> {
        &self.states
    }

    pub fn final_states(&self) -> &HashSet<S> {
        &self.final_states
    }

    pub fn input_actions(&self) -> &HashSet<A> {
        &self.input_actions
    }

    /// The transition table, keyed by `(from, action)`.
    pub fn transitions(&self) -> &HashMap<(S, A), S> {
        &self.transitions
    }

    /// Destination linked for `(from, action)`, if any.
    pub fn destination(&self, from: &S, action: &A) -> Option<&S> {
        self.transitions.get(&(from.clone(), action.clone()))
    }

    pub fn is_final_state(&self, state: &S) -> bool {
        self.final_states.contains(state)
    }

    /// Check if the current state is a final state.
    pub fn can_end(&self) -> bool {
        self.current_state
            .as_ref()
            .is_some_and(|state| self.final_states.contains(state))
    }

    pub fn history(&self) -> &RunHistory<S, A> {
        &self.history
    }

    pub fn config(&self) -> &AutomatonConfig {
        &self.config
    }
}
