//! Human-readable views of an automaton.
//!
//! Both views only read public accessors. Collections are rendered sorted
//! by label, shorter labels first, so the output does not depend on hash
//! order and numeric identifiers come out in numeric order.

use crate::automaton::machine::Automaton;
use crate::core::Symbol;
use std::fmt;

const UNSET: &str = "none";

fn label_or_unset<T: Symbol>(value: Option<&T>) -> String {
    value.map_or_else(|| UNSET.to_string(), Symbol::label)
}

/// `10` sorts after `9`.
fn label_key(label: &str) -> (usize, &str) {
    (label.len(), label)
}

fn render_set<'a, T: Symbol + 'a>(items: impl IntoIterator<Item = &'a T>) -> String {
    let mut labels: Vec<String> = items.into_iter().map(Symbol::label).collect();
    labels.sort_by(|a, b| label_key(a).cmp(&label_key(b)));
    format!("{{{}}}", labels.join(", "))
}

impl<S: Symbol, A: Symbol> Automaton<S, A> {
    /// Multi-line dump of identity, status and the full definition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsa::Automaton;
    ///
    /// let mut fsa =
    ///     Automaton::with_definition("1", Some(1), Some([2]), [3], ["a"]).unwrap();
    /// fsa.link_states(1, "a", 2).unwrap();
    ///
    /// assert_eq!(
    ///     fsa.describe(),
    ///     "FSA 1, status: created, current state: 1\n    \
    ///      - states(3): {1, 2, 3}\n    \
    ///      - init state: 1\n    \
    ///      - final states(1): {3}\n    \
    ///      - input actions(1): {\"a\"}\n    \
    ///      - state links(1): {(1, \"a\"): 2}"
    /// );
    /// ```
    pub fn describe(&self) -> String {
        let mut links: Vec<(String, String, String)> = self
            .transitions()
            .iter()
            .map(|((from, action), to)| (from.label(), action.label(), to.label()))
            .collect();
        links.sort_by(|a, b| {
            label_key(&a.0)
                .cmp(&label_key(&b.0))
                .then_with(|| label_key(&a.1).cmp(&label_key(&b.1)))
        });
        let links: Vec<String> = links
            .iter()
            .map(|(from, action, to)| format!("({from}, {action}): {to}"))
            .collect();

        let mut text = format!(
            "FSA {}, status: {}, current state: {}",
            self.identity(),
            self.status(),
            label_or_unset(self.current_state())
        );
        text.push_str(&format!(
            "\n    - states({}): {}",
            self.states().len(),
            render_set(self.states())
        ));
        text.push_str(&format!(
            "\n    - init state: {}",
            label_or_unset(self.initial_state())
        ));
        text.push_str(&format!(
            "\n    - final states({}): {}",
            self.final_states().len(),
            render_set(self.final_states())
        ));
        text.push_str(&format!(
            "\n    - input actions({}): {}",
            self.input_actions().len(),
            render_set(self.input_actions())
        ));
        text.push_str(&format!(
            "\n    - state links({}): {{{}}}",
            links.len(),
            links.join(", ")
        ));
        text
    }
}

/// Compact single-line summary.
impl<S: Symbol, A: Symbol> fmt::Display for Automaton<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FSA {}, status: {}, state count: {}, input action count: {}, init state: {}, current state: {}",
            self.identity(),
            self.status(),
            self.states().len(),
            self.input_actions().len(),
            label_or_unset(self.initial_state()),
            label_or_unset(self.current_state())
        )
    }
}
