//! Run verdicts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a chain was rejected.
///
/// Every rejection is a normal, final outcome of the single pass over the
/// chain: recoverable data for the caller to show, never an error or a
/// panic.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum RejectReason {
    /// The chain contains a symbol outside the declared input alphabet.
    /// No step is attempted in this case.
    AlphabetViolation,
    /// Some configuration had no applicable rule before the input was
    /// exhausted.
    NoTransition,
    /// The input was consumed, but the stack was not empty or the machine
    /// did not finish in the end state.
    NotInAcceptingConfiguration,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::AlphabetViolation => "the chain contains symbols outside the input alphabet",
            Self::NoTransition => "no transition applies to the current configuration",
            Self::NotInAcceptingConfiguration => "the final configuration is not accepting",
        };
        write!(f, "{message}")
    }
}

/// The result of running a chain against a machine.
///
/// # Example
///
/// ```rust
/// use pushdown::{RejectReason, Verdict};
///
/// assert!(Verdict::Accepted.is_accepted());
/// assert!(!Verdict::Rejected(RejectReason::NoTransition).is_accepted());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Verdict {
    /// The chain belongs to the language of the machine.
    Accepted,
    /// The chain was rejected for the given reason.
    Rejected(RejectReason),
}

impl Verdict {
    /// Whether the chain was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "the chain belongs to the automaton"),
            Self::Rejected(reason) => {
                write!(f, "the chain does not belong to the automaton: {reason}")
            }
        }
    }
}
