//! Pushdown: a deterministic pushdown automaton simulator
//!
//! Pushdown decides whether a chain of symbols belongs to the language of
//! a deterministic pushdown automaton (DPDA), records a full step-by-step
//! trace of the run, and, for transducer machines, accumulates a
//! transformed output string.
//!
//! # Core Concepts
//!
//! - **Machine**: immutable description (states, alphabets, rules, start
//!   and end markers), built once from a decoded JSON record
//! - **Simulator**: the bounded, deterministic step loop; each run owns
//!   its own configuration and never shares mutable state
//! - **Trace**: the ordered record of every applied rule, enough to
//!   render a step-by-step log without re-running
//!
//! # Example
//!
//! ```rust
//! use pushdown::{Machine, Simulator};
//!
//! // a^n b^n: 'a' pushes a counter symbol, 'b' pops it, and a trailing
//! // epsilon rule drains the start symbol.
//! let machine = Machine::from_json(
//!     r#"{
//!         "states": ["q0"],
//!         "alphabet": ["a", "b"],
//!         "in_stack": ["Z", "A"],
//!         "rules": [
//!             ["q0", "a", "Z", "q0", "AZ"],
//!             ["q0", "a", "A", "q0", "AA"],
//!             ["q0", "b", "A", "q0", "EPS"],
//!             ["q0", "EPS", "Z", "q0", "EPS"]
//!         ],
//!         "start": "q0",
//!         "start_stack": "Z",
//!         "end": "q0"
//!     }"#,
//! )
//! .unwrap();
//!
//! let simulator = Simulator::new(&machine);
//!
//! let outcome = simulator.run("aabb");
//! assert!(outcome.is_accepted());
//! assert_eq!(outcome.trace.len(), 5);
//!
//! let outcome = simulator.run("ba");
//! assert!(!outcome.is_accepted());
//! ```

pub mod builder;
pub mod core;
pub mod sim;

// Re-export commonly used types
pub use builder::{MachineDescription, MalformedMachine};
pub use self::core::{Machine, Rule, StepRecord, Symbol, Trace};
pub use sim::{RejectReason, RunOutcome, Simulator, Verdict};
