//! Builder for constructing automata.

use crate::automaton::{Automaton, AutomatonConfig, AutomatonError};
use crate::core::Symbol;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing automata with a fluent API.
///
/// Links are checked together in [`AutomatonBuilder::build`], which
/// reports every unknown state or action at once instead of stopping at
/// the first one.
pub struct AutomatonBuilder<S: Symbol, A: Symbol> {
    identity: String,
    initial: Option<S>,
    states: Vec<S>,
    final_states: Vec<S>,
    actions: Vec<A>,
    links: Vec<(S, A, S)>,
    config: AutomatonConfig,
}

impl<S: Symbol, A: Symbol> AutomatonBuilder<S, A> {
    /// Create a new builder.
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            initial: None,
            states: Vec::new(),
            final_states: Vec::new(),
            actions: Vec::new(),
            links: Vec::new(),
            config: AutomatonConfig::default(),
        }
    }

    /// Set the initial state. Defaults to the first registered state.
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    pub fn final_state(mut self, state: S) -> Self {
        self.final_states.push(state);
        self
    }

    pub fn final_states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.final_states.extend(states);
        self
    }

    pub fn action(mut self, action: A) -> Self {
        self.actions.push(action);
        self
    }

    pub fn actions(mut self, actions: impl IntoIterator<Item = A>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Add a transition `(from, action) -> to`. Later links for the same
    /// `(from, action)` replace earlier ones.
    pub fn link(mut self, from: S, action: A, to: S) -> Self {
        self.links.push((from, action, to));
        self
    }

    pub fn config(mut self, config: AutomatonConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the automaton, accumulating ALL link errors.
    pub fn build(self) -> Validation<Automaton<S, A>, NonEmptyVec<AutomatonError>> {
        let automaton = Automaton::with_definition(
            self.identity,
            self.initial,
            Some(self.states),
            self.final_states,
            self.actions,
        );
        let mut automaton = match automaton {
            Ok(automaton) => automaton,
            Err(err) => return Validation::fail(err),
        };

        let checks: Vec<Validation<(), NonEmptyVec<AutomatonError>>> = self
            .links
            .into_iter()
            .map(|(from, action, to)| match automaton.link_states(from, action, to) {
                Ok(_) => Validation::success(()),
                Err(err) => Validation::fail(err),
            })
            .collect();

        let config = self.config;
        Validation::all_vec(checks).map(move |_| automaton.with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InstanceStatus;

    #[test]
    fn fluent_api_builds_automaton() {
        let result = AutomatonBuilder::new("1")
            .initial(1)
            .state(2)
            .final_state(3)
            .actions(['a', 'b', 'c'])
            .link(1, 'a', 2)
            .link(2, 'b', 3)
            .link(3, 'c', 1)
            .build();

        assert!(result.is_success());
        let Validation::Success(fsa) = result else {
            panic!("Expected success");
        };
        assert_eq!(fsa.identity(), "1");
        assert_eq!(fsa.status(), InstanceStatus::Created);
        assert_eq!(fsa.current_state(), Some(&1));
        assert_eq!(fsa.transitions().len(), 3);
        assert!(fsa.is_final_state(&3));
    }

    #[test]
    fn build_accumulates_all_link_errors() {
        let result = AutomatonBuilder::new("broken")
            .states([1, 2])
            .action('a')
            .link(1, 'a', 2)
            .link(9, 'a', 2)
            .link(1, 'z', 2)
            .link(1, 'a', 8)
            .build();

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);

                let missing_states = errors
                    .iter()
                    .filter(|e| matches!(e, AutomatonError::StateNotFound { .. }))
                    .count();
                let missing_actions = errors
                    .iter()
                    .filter(|e| matches!(e, AutomatonError::ActionNotFound { .. }))
                    .count();

                assert_eq!(missing_states, 2);
                assert_eq!(missing_actions, 1);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn later_links_replace_earlier_ones() {
        let result = AutomatonBuilder::new("x")
            .states([1, 2, 3])
            .action('a')
            .link(1, 'a', 2)
            .link(1, 'a', 3)
            .build();

        let Validation::Success(fsa) = result else {
            panic!("Expected success");
        };
        assert_eq!(fsa.destination(&1, &'a'), Some(&3));
        assert_eq!(fsa.transitions().len(), 1);
    }

    #[test]
    fn config_is_applied_after_links() {
        let result = AutomatonBuilder::new("x")
            .states([1, 2])
            .action('a')
            .link(1, 'a', 2)
            .config(AutomatonConfig::frozen())
            .build();

        let Validation::Success(mut fsa) = result else {
            panic!("Expected success");
        };
        assert!(fsa.config().freeze_definition_when_running);

        fsa.do_action(&'a').unwrap();
        assert!(fsa.add_state(3, false).unwrap_err().is_illegal_state());
    }

    #[test]
    fn first_state_is_default_initial() {
        let result = AutomatonBuilder::<u32, char>::new("x").states([4, 5]).build();

        let Validation::Success(fsa) = result else {
            panic!("Expected success");
        };
        assert_eq!(fsa.initial_state(), Some(&4));
    }
}
