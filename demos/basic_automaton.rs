//! Basic Automaton
//!
//! Builds the three-state cycle 1 -a-> 2 -b-> 3 -c-> 1, walks it once
//! around and prints the description before and after.
//!
//! Run with: RUST_LOG=fsa=debug cargo run --example basic_automaton

use fsa::Automaton;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Basic Automaton Example ===\n");

    let mut fsa = Automaton::with_definition("1", Some(1), Some([2]), [3], ["a", "b", "c"])
        .expect("states collection is present");
    println!("{}\n", fsa.describe());

    fsa.link_states(1, "a", 2).expect("1 and 2 are registered");
    fsa.link_states(2, "b", 3).expect("2 and 3 are registered");
    fsa.link_states(3, "c", 1).expect("3 and 1 are registered");

    for action in ["a", "b", "c"] {
        match fsa.do_action(&action) {
            Ok(state) => println!("{action:?} -> {state:?}"),
            Err(err) => println!("{action:?} rejected: {err}"),
        }
    }

    println!("\n{}", fsa.describe());
    println!("\nSummary: {fsa}");

    match fsa.end_instance() {
        Ok(state) => println!("Ended at {state:?}"),
        Err(err) => println!("Cannot end yet: {err}"),
    }

    println!("\n=== Example Complete ===");
}
