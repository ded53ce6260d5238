//! Property-based tests for automaton semantics.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated definitions and action sequences.

use fsa::{Automaton, ErrorKind, InstanceStatus};
use proptest::prelude::*;
use std::collections::HashMap;

const STATES: u8 = 6;
const ACTIONS: u8 = 4;

prop_compose! {
    fn arbitrary_state()(state in 0..STATES) -> u8 {
        state
    }
}

prop_compose! {
    fn arbitrary_action()(action in 0..ACTIONS) -> char {
        char::from(b'a' + action)
    }
}

prop_compose! {
    fn arbitrary_links()(
        links in prop::collection::vec((arbitrary_state(), arbitrary_action(), arbitrary_state()), 0..20)
    ) -> Vec<(u8, char, u8)> {
        links
    }
}

/// States `0..STATES`, actions `a..`, initial state 0, the given finals.
fn automaton(finals: &[u8], links: &[(u8, char, u8)]) -> Automaton<u8, char> {
    let mut fsa = Automaton::with_definition(
        "prop",
        Some(0),
        Some(0..STATES),
        finals.iter().copied(),
        (0..ACTIONS).map(|a| char::from(b'a' + a)),
    )
    .unwrap();
    for &(from, action, to) in links {
        fsa.link_states(from, action, to).unwrap();
    }
    fsa
}

proptest! {
    #[test]
    fn unknown_references_never_change_the_table(
        links in arbitrary_links(),
        from in 0..STATES * 2,
        action in prop::char::range('a', 'h'),
        to in 0..STATES * 2,
    ) {
        let mut fsa = automaton(&[], &links);
        let before = fsa.transitions().clone();

        let known = from < STATES && to < STATES && action < char::from(b'a' + ACTIONS);
        let result = fsa.link_states(from, action, to);

        if known {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
            prop_assert_eq!(fsa.transitions(), &before);
        }
    }

    #[test]
    fn last_link_wins(
        from in arbitrary_state(),
        action in arbitrary_action(),
        first in arbitrary_state(),
        second in arbitrary_state(),
    ) {
        let fsa = automaton(&[], &[(from, action, first), (from, action, second)]);

        prop_assert_eq!(fsa.destination(&from, &action), Some(&second));
        prop_assert_eq!(fsa.transitions().len(), 1);
    }

    #[test]
    fn walk_matches_reference_table(
        links in arbitrary_links(),
        actions in prop::collection::vec(arbitrary_action(), 0..30),
    ) {
        let mut fsa = automaton(&[], &links);
        let table: HashMap<(u8, char), u8> =
            links.iter().map(|&(from, action, to)| ((from, action), to)).collect();

        let mut expected = 0u8;
        for action in actions {
            let status_before = fsa.status();
            match table.get(&(expected, action)) {
                Some(&to) => {
                    prop_assert_eq!(fsa.do_action(&action).unwrap(), &to);
                    prop_assert_eq!(fsa.status(), InstanceStatus::Running);
                    expected = to;
                }
                None => {
                    let err = fsa.do_action(&action).unwrap_err();
                    prop_assert_eq!(err.kind(), ErrorKind::NotFound);
                    prop_assert_eq!(fsa.status(), status_before);
                }
            }
            prop_assert_eq!(fsa.current_state(), Some(&expected));
        }
    }

    #[test]
    fn end_instance_requires_final_state(
        finals in prop::collection::vec(arbitrary_state(), 0..3),
        links in arbitrary_links(),
        actions in prop::collection::vec(arbitrary_action(), 0..10),
    ) {
        let mut fsa = automaton(&finals, &links);
        for action in &actions {
            let _ = fsa.do_action(action);
        }
        let current = *fsa.current_state().unwrap();
        let status_before = fsa.status();

        let result = fsa.end_instance();

        if finals.contains(&current) {
            prop_assert_eq!(result.unwrap(), &current);
            prop_assert_eq!(fsa.end_state(), Some(&current));
            prop_assert_eq!(fsa.status(), InstanceStatus::Ended);
        } else {
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::IllegalState);
            prop_assert_eq!(fsa.end_state(), None);
            prop_assert_eq!(fsa.status(), status_before);
        }
    }

    #[test]
    fn ended_instance_rejects_every_action(
        links in arbitrary_links(),
        action in prop::char::range('a', 'z'),
    ) {
        let mut fsa = automaton(&[0], &links);
        fsa.end_instance().unwrap();

        let err = fsa.do_action(&action).unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::IllegalState);
        prop_assert_eq!(fsa.current_state(), Some(&0));
        prop_assert_eq!(fsa.status(), InstanceStatus::Ended);
    }

    #[test]
    fn history_path_mirrors_successful_steps(
        links in arbitrary_links(),
        actions in prop::collection::vec(arbitrary_action(), 0..20),
    ) {
        let mut fsa = automaton(&[], &links);
        let mut path = vec![0u8];

        for action in &actions {
            if let Ok(&to) = fsa.do_action(action) {
                path.push(to);
            }
        }

        let recorded: Vec<u8> = fsa.history().path().into_iter().copied().collect();
        if fsa.history().is_empty() {
            prop_assert!(recorded.is_empty());
        } else {
            prop_assert_eq!(recorded, path);
        }
    }
}
