//! Transducer variant
//!
//! The same a^n b^n language, but every push rule emits an output
//! symbol, so accepting runs also transform the chain: a^n b^n becomes
//! X^n.
//!
//! Key concepts:
//! - The optional in_transform alphabet marks the transducer variant
//! - Six-field rules carry an output symbol ("EPS" for none)
//! - The accumulated output rides along in every trace step
//!
//! Run with: cargo run --example transducer

use pushdown::{Machine, Simulator};

const DESCRIPTION: &str = r#"{
    "states": ["q0"],
    "alphabet": ["a", "b"],
    "in_stack": ["Z", "A"],
    "in_transform": ["X"],
    "rules": [
        ["q0", "a", "Z", "q0", "AZ", "X"],
        ["q0", "a", "A", "q0", "AA", "X"],
        ["q0", "b", "A", "q0", "EPS", "EPS"],
        ["q0", "EPS", "Z", "q0", "EPS", "EPS"]
    ],
    "start": "q0",
    "start_stack": "Z",
    "end": "q0"
}"#;

fn main() {
    println!("=== Pushdown Transducer ===\n");

    let machine = Machine::from_json(DESCRIPTION).expect("description is well-formed");

    println!("Machine: {machine}");
    println!("Transition table:");
    for rule in machine.rules() {
        println!("  {rule}");
    }

    let simulator = Simulator::new(&machine);

    for chain in ["ab", "aabb", "aaabbb", "aab"] {
        println!("\nTransforming {chain:?}:");
        let outcome = simulator.run(chain);
        for step in outcome.trace.steps() {
            println!("  {step}");
        }
        println!("  => {}", outcome.verdict);
        if outcome.is_accepted() {
            println!("  => output: {:?}", outcome.output());
        }
    }

    println!("\n=== Demo Complete ===");
}
