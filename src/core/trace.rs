//! Step-by-step run traces.
//!
//! A trace is the ordered record of every rule application in one run,
//! sufficient for a caller to render a step-by-step log without
//! re-running the simulation. It is an observable side product of the
//! run, never consulted for control flow.

use super::rule::Rule;
use super::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot taken immediately after applying one rule.
///
/// The snapshot carries the post-step state and stack, the input symbol
/// consumed at this position (epsilon at the virtual trailing position),
/// the rule that fired, and the output accumulated so far. Steps that
/// find no applicable rule are not recorded; the run's verdict carries
/// that failure instead.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1-based step index.
    pub step: usize,
    /// Current state after applying the rule.
    pub state: String,
    /// Input symbol consumed at this step.
    pub input: Symbol,
    /// Full stack contents after the step, top first.
    pub stack: Vec<char>,
    /// The rule that was applied.
    pub rule: Rule,
    /// Output accumulated up to and including this step.
    pub output: String,
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "step {}: state {}, input {}, stack ",
            self.step, self.state, self.input
        )?;
        if self.stack.is_empty() {
            write!(f, "ε")?;
        } else {
            for c in &self.stack {
                write!(f, "{c}")?;
            }
        }
        write!(f, ", rule {}", self.rule)?;
        if !self.output.is_empty() {
            write!(f, ", output {}", self.output)?;
        }
        Ok(())
    }
}

/// Ordered, append-only trace of one simulation run.
///
/// `record` is pure: it returns a new trace with the step appended,
/// leaving the original untouched. One run produces exactly one trace;
/// the next run starts a fresh one.
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
/// let outcome = Simulator::new(&machine).run("ab");
/// // Two input symbols plus the trailing epsilon step.
/// assert_eq!(outcome.trace.len(), 3);
/// assert_eq!(outcome.trace.steps()[0].stack, vec!['A', 'Z']);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Trace {
    steps: Vec<StepRecord>,
}

impl Trace {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Record a step, returning a new trace.
    ///
    /// The original trace is left unchanged.
    pub fn record(&self, step: StepRecord) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// All recorded steps, in order.
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no step was recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The most recent step, if any.
    pub fn last(&self) -> Option<&StepRecord> {
        self.steps.last()
    }

    /// The transducer output accumulated over the whole run.
    ///
    /// Equal to the last step's output field, or the empty string if no
    /// step ran.
    pub fn final_output(&self) -> &str {
        self.steps.last().map_or("", |s| s.output.as_str())
    }
}
