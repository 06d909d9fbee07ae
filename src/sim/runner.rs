//! The deterministic step loop.

use crate::core::{Machine, StepRecord, Symbol, Trace};
use crate::sim::config::Configuration;
use crate::sim::verdict::{RejectReason, Verdict};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything one run produces: the verdict and the step-by-step trace.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Whether the chain was accepted, and if not, why.
    pub verdict: Verdict,
    /// One record per applied rule, in order.
    pub trace: Trace,
}

impl RunOutcome {
    /// Whether the chain was accepted.
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }

    /// The transducer output accumulated over the run, or the empty
    /// string for recognizer machines and runs that applied no rule.
    pub fn output(&self) -> &str {
        self.trace.final_output()
    }
}

/// Executes chains against a borrowed [`Machine`].
///
/// The simulator itself holds no run state: every call to [`run`] owns a
/// fresh configuration and trace, so one simulator may be shared across
/// threads and runs never observe each other.
///
/// [`run`]: Simulator::run
///
/// # Example
///
/// ```rust
/// use pushdown::{Machine, Simulator};
///
/// let machine = Machine::from_json(
///     r#"{
///         "states": ["q0"],
///         "alphabet": ["a", "b"],
///         "in_stack": ["Z", "A"],
///         "rules": [
///             ["q0", "a", "Z", "q0", "AZ"],
///             ["q0", "a", "A", "q0", "AA"],
///             ["q0", "b", "A", "q0", "EPS"],
///             ["q0", "EPS", "Z", "q0", "EPS"]
///         ],
///         "start": "q0",
///         "start_stack": "Z",
///         "end": "q0"
///     }"#,
/// )
/// .unwrap();
///
/// let simulator = Simulator::new(&machine);
/// assert!(simulator.run("aabb").is_accepted());
/// assert!(!simulator.run("aab").is_accepted());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Simulator<'m> {
    machine: &'m Machine,
}

impl<'m> Simulator<'m> {
    /// Create a simulator for the given machine.
    pub fn new(machine: &'m Machine) -> Self {
        Self { machine }
    }

    /// Run a chain to completion and return the verdict and trace.
    ///
    /// The run is bounded by `chain.len() + 1` iterations: one per input
    /// symbol plus a single virtual epsilon position after the last. Each
    /// iteration looks up the first rule (in source order) matching the
    /// current `(state, input, stack top)` triple and applies it; a
    /// missing rule rejects immediately with the trace accumulated so
    /// far. Chains containing symbols outside the input alphabet are
    /// rejected before any step is attempted.
    ///
    /// Identical `(machine, chain)` pairs always produce identical
    /// outcomes.
    pub fn run(&self, chain: &str) -> RunOutcome {
        debug!(chain, machine = %self.machine, "starting run");

        if let Some(c) = chain.chars().find(|c| !self.machine.in_alphabet(*c)) {
            debug!(symbol = %c, "chain symbol is outside the input alphabet");
            return RunOutcome {
                verdict: Verdict::Rejected(RejectReason::AlphabetViolation),
                trace: Trace::new(),
            };
        }

        let symbols: Vec<char> = chain.chars().collect();
        let mut config = Configuration::start(self.machine);
        let mut trace = Trace::new();

        for position in 0..=symbols.len() {
            let input = symbols
                .get(position)
                .map_or(Symbol::Epsilon, |c| Symbol::Char(*c));
            let stack_top = config.stack_top();

            let Some(rule) = self.machine.find_rule(config.state(), input, stack_top) else {
                debug!(
                    step = position + 1,
                    state = config.state(),
                    %input,
                    %stack_top,
                    "no transition applies"
                );
                return RunOutcome {
                    verdict: Verdict::Rejected(RejectReason::NoTransition),
                    trace,
                };
            };

            config.apply(rule, self.machine.is_transducer());
            trace = trace.record(StepRecord {
                step: position + 1,
                state: config.state().to_string(),
                input,
                stack: config.stack_snapshot(),
                rule: rule.clone(),
                output: config.output().to_string(),
            });
        }

        let accepted = config.stack_is_empty() && config.state() == self.machine.end_state();
        let verdict = if accepted {
            Verdict::Accepted
        } else {
            Verdict::Rejected(RejectReason::NotInAcceptingConfiguration)
        };
        debug!(%verdict, steps = trace.len(), "run finished");

        RunOutcome { verdict, trace }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rule;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Balanced a/b chains: `a` pushes, `b` pops, a trailing epsilon rule
    /// drains the start symbol, and an epsilon stall on `A` lets
    /// unbalanced chains finish the loop and fail the acceptance check.
    const PARENS: &str = r#"{
        "states": ["q0"],
        "alphabet": ["a", "b"],
        "in_stack": ["Z", "A"],
        "rules": [
            ["q0", "a", "Z", "q0", "AZ"],
            ["q0", "a", "A", "q0", "AA"],
            ["q0", "b", "A", "q0", "EPS"],
            ["q0", "EPS", "Z", "q0", "EPS"],
            ["q0", "EPS", "A", "q0", "A"]
        ],
        "start": "q0",
        "start_stack": "Z",
        "end": "q0"
    }"#;

    const TRANSDUCER: &str = r#"{
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

    fn parens() -> Machine {
        Machine::from_json(PARENS).unwrap()
    }

    #[rstest]
    #[case("", Verdict::Accepted)]
    #[case("ab", Verdict::Accepted)]
    #[case("aabb", Verdict::Accepted)]
    #[case("abab", Verdict::Accepted)]
    #[case("aaabbb", Verdict::Accepted)]
    #[case("a", Verdict::Rejected(RejectReason::NotInAcceptingConfiguration))]
    #[case("aab", Verdict::Rejected(RejectReason::NotInAcceptingConfiguration))]
    #[case("b", Verdict::Rejected(RejectReason::NoTransition))]
    #[case("abb", Verdict::Rejected(RejectReason::NoTransition))]
    #[case("ca", Verdict::Rejected(RejectReason::AlphabetViolation))]
    #[case("abc", Verdict::Rejected(RejectReason::AlphabetViolation))]
    fn balanced_chain_verdicts(#[case] chain: &str, #[case] expected: Verdict) {
        let machine = parens();
        let outcome = Simulator::new(&machine).run(chain);
        assert_eq!(outcome.verdict, expected);
    }

    #[test]
    fn accepted_run_ends_with_empty_stack() {
        let machine = parens();
        let outcome = Simulator::new(&machine).run("ab");

        assert!(outcome.is_accepted());
        assert!(outcome.trace.last().unwrap().stack.is_empty());
    }

    #[test]
    fn trace_records_every_step_of_an_accepted_run() {
        let machine = parens();
        let outcome = Simulator::new(&machine).run("ab");

        let push_rule = Rule {
            from: "q0".to_string(),
            input: Symbol::Char('a'),
            stack_top: Symbol::Char('Z'),
            to: "q0".to_string(),
            push: vec!['A', 'Z'],
            output: Symbol::Epsilon,
        };
        let pop_rule = Rule {
            from: "q0".to_string(),
            input: Symbol::Char('b'),
            stack_top: Symbol::Char('A'),
            to: "q0".to_string(),
            push: vec![],
            output: Symbol::Epsilon,
        };
        let drain_rule = Rule {
            from: "q0".to_string(),
            input: Symbol::Epsilon,
            stack_top: Symbol::Char('Z'),
            to: "q0".to_string(),
            push: vec![],
            output: Symbol::Epsilon,
        };

        let expected = vec![
            StepRecord {
                step: 1,
                state: "q0".to_string(),
                input: Symbol::Char('a'),
                stack: vec!['A', 'Z'],
                rule: push_rule,
                output: String::new(),
            },
            StepRecord {
                step: 2,
                state: "q0".to_string(),
                input: Symbol::Char('b'),
                stack: vec!['Z'],
                rule: pop_rule,
                output: String::new(),
            },
            StepRecord {
                step: 3,
                state: "q0".to_string(),
                input: Symbol::Epsilon,
                stack: vec![],
                rule: drain_rule,
                output: String::new(),
            },
        ];

        assert_eq!(outcome.trace.steps(), &expected[..]);
    }

    #[test]
    fn alphabet_check_precedes_simulation() {
        // No rules at all: a bad symbol must still reject as an alphabet
        // violation, not a missing transition.
        let machine = Machine::from_json(
            r#"{
                "states": ["q0"],
                "alphabet": ["a", "b"],
                "in_stack": ["Z"],
                "rules": [["q0", "a", "Z", "q0", "Z"]],
                "start": "q0",
                "start_stack": "Z",
                "end": "q0"
            }"#,
        )
        .unwrap();

        let outcome = Simulator::new(&machine).run("c");

        assert_eq!(
            outcome.verdict,
            Verdict::Rejected(RejectReason::AlphabetViolation)
        );
        assert!(outcome.trace.is_empty());
    }

    #[test]
    fn missing_transition_keeps_prior_steps_in_trace() {
        let machine = Machine::from_json(
            r#"{
                "states": ["q0", "q1"],
                "alphabet": ["a"],
                "in_stack": ["Z"],
                "rules": [["q0", "a", "Z", "q1", "Z"]],
                "start": "q0",
                "start_stack": "Z",
                "end": "q1"
            }"#,
        )
        .unwrap();

        // The second 'a' lands in (q1, a, Z), which has no rule.
        let outcome = Simulator::new(&machine).run("aa");

        assert_eq!(
            outcome.verdict,
            Verdict::Rejected(RejectReason::NoTransition)
        );
        assert_eq!(outcome.trace.len(), 1);
        assert_eq!(outcome.trace.steps()[0].state, "q1");
    }

    #[test]
    fn empty_stack_alone_does_not_accept() {
        // The chain empties the stack but finishes in q1, not the end
        // state q2.
        let machine = Machine::from_json(
            r#"{
                "states": ["q0", "q1", "q2"],
                "alphabet": ["a"],
                "in_stack": ["Z"],
                "rules": [
                    ["q0", "a", "Z", "q1", "EPS"],
                    ["q1", "EPS", "ε", "q1", "EPS"]
                ],
                "start": "q0",
                "start_stack": "Z",
                "end": "q2"
            }"#,
        )
        .unwrap();

        let outcome = Simulator::new(&machine).run("a");

        assert_eq!(
            outcome.verdict,
            Verdict::Rejected(RejectReason::NotInAcceptingConfiguration)
        );
        assert!(outcome.trace.last().unwrap().stack.is_empty());
    }

    #[test]
    fn end_state_alone_does_not_accept() {
        // The chain reaches the end state with the start symbol still on
        // the stack.
        let machine = Machine::from_json(
            r#"{
                "states": ["q0", "q1"],
                "alphabet": ["a"],
                "in_stack": ["Z"],
                "rules": [
                    ["q0", "a", "Z", "q1", "Z"],
                    ["q1", "EPS", "Z", "q1", "Z"]
                ],
                "start": "q0",
                "start_stack": "Z",
                "end": "q1"
            }"#,
        )
        .unwrap();

        let outcome = Simulator::new(&machine).run("a");

        assert_eq!(
            outcome.verdict,
            Verdict::Rejected(RejectReason::NotInAcceptingConfiguration)
        );
        assert_eq!(outcome.trace.last().unwrap().stack, vec!['Z']);
    }

    #[test]
    fn epsilon_stack_top_matches_only_the_empty_stack() {
        let machine = Machine::from_json(
            r#"{
                "states": ["q0", "q1"],
                "alphabet": ["a"],
                "in_stack": ["Z"],
                "rules": [
                    ["q0", "a", "Z", "q1", "EPS"],
                    ["q1", "EPS", "ε", "q1", "EPS"]
                ],
                "start": "q0",
                "start_stack": "Z",
                "end": "q1"
            }"#,
        )
        .unwrap();

        let outcome = Simulator::new(&machine).run("a");
        assert!(outcome.is_accepted());
    }

    #[test]
    fn epsilon_input_rule_never_matches_a_real_symbol() {
        let machine = Machine::from_json(
            r#"{
                "states": ["q0"],
                "alphabet": ["a"],
                "in_stack": ["Z"],
                "rules": [["q0", "EPS", "Z", "q0", "EPS"]],
                "start": "q0",
                "start_stack": "Z",
                "end": "q0"
            }"#,
        )
        .unwrap();

        let outcome = Simulator::new(&machine).run("a");

        assert_eq!(
            outcome.verdict,
            Verdict::Rejected(RejectReason::NoTransition)
        );
        assert!(outcome.trace.is_empty());

        // The same rule does fire for the empty chain's trailing epsilon.
        assert!(Simulator::new(&machine).run("").is_accepted());
    }

    #[test]
    fn run_is_deterministic() {
        let machine = parens();
        let simulator = Simulator::new(&machine);

        let first = simulator.run("aabb");
        let second = simulator.run("aabb");

        assert_eq!(first, second);
    }

    #[test]
    fn trace_is_bounded_by_chain_length_plus_one() {
        let machine = parens();
        let simulator = Simulator::new(&machine);

        for chain in ["", "a", "ab", "aabb", "abab", "abb"] {
            let outcome = simulator.run(chain);
            assert!(outcome.trace.len() <= chain.chars().count() + 1);
        }
    }

    #[test]
    fn transducer_emits_one_output_symbol_per_push_step() {
        let machine = Machine::from_json(TRANSDUCER).unwrap();
        let outcome = Simulator::new(&machine).run("aabb");

        assert!(outcome.is_accepted());
        assert_eq!(outcome.output(), "XX");

        let outputs: Vec<&str> = outcome
            .trace
            .steps()
            .iter()
            .map(|s| s.output.as_str())
            .collect();
        assert_eq!(outputs, vec!["X", "XX", "XX", "XX", "XX"]);
    }

    #[test]
    fn recognizer_ignores_output_fields() {
        // Same rules as the transducer, but without in_transform the
        // sixth field is inert.
        let machine = Machine::from_json(
            r#"{
                "states": ["q0"],
                "alphabet": ["a", "b"],
                "in_stack": ["Z", "A"],
                "rules": [
                    ["q0", "a", "Z", "q0", "AZ", "X"],
                    ["q0", "b", "A", "q0", "EPS", "EPS"],
                    ["q0", "EPS", "Z", "q0", "EPS", "EPS"]
                ],
                "start": "q0",
                "start_stack": "Z",
                "end": "q0"
            }"#,
        )
        .unwrap();

        let outcome = Simulator::new(&machine).run("ab");

        assert!(outcome.is_accepted());
        assert_eq!(outcome.output(), "");
    }

    #[test]
    fn outcome_serializes_correctly() {
        let machine = parens();
        let outcome = Simulator::new(&machine).run("ab");

        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: RunOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }
}
