//! Balanced chain recognizer
//!
//! This demo builds the classic a^n b^n machine and checks a few chains
//! against it, printing the transition table and the step-by-step log.
//!
//! Key concepts:
//! - Machine construction from a JSON description
//! - The trailing epsilon step that drains the start symbol
//! - Reading a verdict and its trace
//!
//! Run with: cargo run --example balanced_parens

use pushdown::{Machine, Simulator};

const DESCRIPTION: &str = r#"{
    "states": ["q0"],
    "alphabet": ["a", "b"],
    "in_stack": ["Z", "A"],
    "rules": [
        ["q0", "a", "Z", "q0", "AZ"],
        ["q0", "a", "A", "q0", "AA"],
        ["q0", "b", "A", "q0", "EPS"],
        ["q0", "EPS", "Z", "q0", "EPS"]
    ],
    "start": "q0",
    "start_stack": "Z",
    "end": "q0"
}"#;

fn main() {
    println!("=== Balanced Chain Recognizer ===\n");

    let machine = Machine::from_json(DESCRIPTION).expect("description is well-formed");

    println!("Machine: {machine}");
    println!("Transition table:");
    for rule in machine.rules() {
        println!("  {rule}");
    }

    let simulator = Simulator::new(&machine);

    for chain in ["ab", "aabb", "aab", "ba", "abc"] {
        println!("\nChecking {chain:?}:");
        let outcome = simulator.run(chain);
        for step in outcome.trace.steps() {
            println!("  {step}");
        }
        println!("  => {}", outcome.verdict);
    }

    println!("\n=== Demo Complete ===");
}
