//! Transition rules.

use super::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single transition rule of a deterministic pushdown automaton.
///
/// A rule fires when the current state, the current input symbol (or the
/// virtual epsilon position past the end of the chain), and the stack top
/// (epsilon for an empty stack) all match exactly. Applying it moves the
/// machine to `to`, pushes the symbols of `push` one at a time in
/// left-to-right order, then removes one symbol from the top when
/// `stack_top` is a real symbol. In the transducer variant a non-epsilon
/// `output` symbol is appended to the output accumulator.
///
/// # Example
///
/// ```rust
/// use pushdown::{Rule, Symbol};
///
/// let rule = Rule {
///     from: "q0".to_string(),
///     input: Symbol::Char('a'),
///     stack_top: Symbol::Char('Z'),
///     to: "q0".to_string(),
///     push: vec!['A', 'Z'],
///     output: Symbol::Epsilon,
/// };
///
/// assert!(rule.matches("q0", Symbol::Char('a'), Symbol::Char('Z')));
/// assert!(!rule.matches("q0", Symbol::Epsilon, Symbol::Char('Z')));
/// assert_eq!(rule.to_string(), "(q0, a, Z) → (q0, AZ)");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rule {
    /// State the rule fires from.
    pub from: String,
    /// Input symbol consumed, or epsilon for an input-free move.
    pub input: Symbol,
    /// Stack top required, or epsilon to require an empty stack.
    pub stack_top: Symbol,
    /// State the rule moves to.
    pub to: String,
    /// Symbols pushed onto the stack, left to right. Empty means no push.
    pub push: Vec<char>,
    /// Output symbol emitted in the transducer variant.
    pub output: Symbol,
}

impl Rule {
    /// Check whether this rule fires for the given configuration triple.
    ///
    /// The comparison is exact: epsilon matches only epsilon, never a
    /// real symbol.
    pub fn matches(&self, state: &str, input: Symbol, stack_top: Symbol) -> bool {
        self.from == state && self.input == input && self.stack_top == stack_top
    }
}

impl fmt::Display for Rule {
    /// Formal transition-table notation: `(q0, a, Z) → (q1, AZ)`, with
    /// the output symbol appended for transducer rules.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}) → ({}, ",
            self.from, self.input, self.stack_top, self.to
        )?;
        if self.push.is_empty() {
            write!(f, "ε")?;
        } else {
            for c in &self.push {
                write!(f, "{c}")?;
            }
        }
        if !self.output.is_epsilon() {
            write!(f, ", {}", self.output)?;
        }
        write!(f, ")")
    }
}
