//! The immutable machine description.

use super::rule::Rule;
use super::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable deterministic pushdown automaton description.
///
/// A `Machine` is built once from a decoded [`MachineDescription`] and
/// never mutated afterwards; loading a new description replaces it
/// wholesale. Because it is read-only it can be shared freely across any
/// number of concurrent runs.
///
/// The rule list keeps its source order. Rule lookup is a first-match
/// scan, so a rule set that is accidentally nondeterministic (two rules
/// with the same trigger triple) silently resolves to the earlier rule.
///
/// [`MachineDescription`]: crate::builder::MachineDescription
///
/// # Example
///
/// ```rust
/// use pushdown::{Machine, Symbol};
///
/// let machine = Machine::from_json(
///     r#"{
///         "states": ["q0"],
///         "alphabet": ["a", "b"],
///         "in_stack": ["Z", "A"],
///         "rules": [["q0", "a", "Z", "q0", "AZ"]],
///         "start": "q0",
///         "start_stack": "Z",
///         "end": "q0"
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(machine.start_state(), "q0");
/// assert!(machine.in_alphabet('a'));
/// assert!(machine
///     .find_rule("q0", Symbol::Char('a'), Symbol::Char('Z'))
///     .is_some());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Machine {
    pub(crate) states: Vec<String>,
    pub(crate) input_alphabet: Vec<char>,
    pub(crate) stack_alphabet: Vec<char>,
    pub(crate) output_alphabet: Option<Vec<char>>,
    pub(crate) rules: Vec<Rule>,
    pub(crate) start_state: String,
    pub(crate) start_stack: char,
    pub(crate) end_state: String,
}

impl Machine {
    /// The declared state labels.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// The declared input alphabet.
    pub fn input_alphabet(&self) -> &[char] {
        &self.input_alphabet
    }

    /// The declared stack alphabet.
    pub fn stack_alphabet(&self) -> &[char] {
        &self.stack_alphabet
    }

    /// The declared output alphabet, present only in the transducer
    /// variant.
    pub fn output_alphabet(&self) -> Option<&[char]> {
        self.output_alphabet.as_deref()
    }

    /// Whether this machine is a transducer and accumulates output.
    pub fn is_transducer(&self) -> bool {
        self.output_alphabet.is_some()
    }

    /// The transition rules, in source order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The start state.
    pub fn start_state(&self) -> &str {
        &self.start_state
    }

    /// The symbol the stack holds at the start of a run.
    pub fn start_stack(&self) -> char {
        self.start_stack
    }

    /// The accepting end state.
    pub fn end_state(&self) -> &str {
        &self.end_state
    }

    /// Check whether a character belongs to the input alphabet.
    pub fn in_alphabet(&self, c: char) -> bool {
        self.input_alphabet.contains(&c)
    }

    /// Find the first rule (in source order) matching the configuration
    /// triple, if any.
    ///
    /// Epsilon components match exactly: an epsilon input rule applies
    /// only at the virtual position past the end of the chain, and an
    /// epsilon stack-top rule only when the stack is empty.
    pub fn find_rule(&self, state: &str, input: Symbol, stack_top: Symbol) -> Option<&Rule> {
        self.rules.iter().find(|r| r.matches(state, input, stack_top))
    }
}

impl fmt::Display for Machine {
    /// Formal 7-tuple notation: `P({q0,q1}, {a,b}, {Z,A}, δ, q0, Z, q1)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let states = self.states.join(",");
        let alphabet: String = join_chars(&self.input_alphabet);
        let stack: String = join_chars(&self.stack_alphabet);
        write!(
            f,
            "P({{{states}}}, {{{alphabet}}}, {{{stack}}}, δ, {}, {}, {})",
            self.start_state, self.start_stack, self.end_state
        )
    }
}

fn join_chars(chars: &[char]) -> String {
    let mut out = String::new();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}
