//! The mutable configuration of one run.

use crate::core::{Machine, Rule, Symbol};

/// Instantaneous state of a run: control state, stack, and accumulated
/// output.
///
/// A configuration is created fresh for every run and owned by it; it is
/// never shared across runs or threads. The stack is kept as a `Vec` with
/// the top at the end, so pushes and pops are O(1).
#[derive(Clone, Debug)]
pub(crate) struct Configuration {
    state: String,
    stack: Vec<char>,
    output: String,
}

impl Configuration {
    /// The start configuration: start state, start stack symbol, empty
    /// output.
    pub(crate) fn start(machine: &Machine) -> Self {
        Self {
            state: machine.start_state().to_string(),
            stack: vec![machine.start_stack()],
            output: String::new(),
        }
    }

    pub(crate) fn state(&self) -> &str {
        &self.state
    }

    pub(crate) fn output(&self) -> &str {
        &self.output
    }

    /// The stack top, or epsilon when the stack is empty.
    pub(crate) fn stack_top(&self) -> Symbol {
        self.stack
            .last()
            .map_or(Symbol::Epsilon, |c| Symbol::Char(*c))
    }

    pub(crate) fn stack_is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Copy of the stack contents, top first.
    pub(crate) fn stack_snapshot(&self) -> Vec<char> {
        self.stack.iter().rev().copied().collect()
    }

    /// Apply a matched rule.
    ///
    /// The order of operations is part of the machine semantics and must
    /// not change: move to the target state, push the rule's symbols one
    /// at a time left to right, then pop once if the matched stack top
    /// was a real symbol. A length-1 push combined with a pop therefore
    /// leaves the stack unchanged; the usual "replace the top with AZ"
    /// rule re-pushes the matched symbol.
    pub(crate) fn apply(&mut self, rule: &Rule, transducer: bool) {
        self.state.clear();
        self.state.push_str(&rule.to);

        for c in &rule.push {
            self.stack.push(*c);
        }
        if !rule.stack_top.is_epsilon() {
            let _ = self.stack.pop();
        }

        if transducer {
            if let Symbol::Char(c) = rule.output {
                self.output.push(c);
            }
        }
    }
}
