//! Construction-time errors for machine descriptions.

use thiserror::Error;

/// A machine description that cannot be turned into a [`Machine`].
///
/// Construction is the only place these surface; a machine that failed to
/// build must not be run. Run-time negatives (alphabet violations, missing
/// transitions, non-accepting final configurations) are verdicts, not
/// errors.
///
/// [`Machine`]: crate::core::Machine
#[derive(Debug, Error)]
pub enum MalformedMachine {
    /// The source data could not be decoded into the description shape.
    #[error("machine description could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// A rule tuple does not have 5 or 6 fields.
    #[error("rule {index} has {found} fields, expected 5 or 6")]
    RuleArity { index: usize, found: usize },

    /// A single-symbol rule field holds something other than one
    /// character or an epsilon marker.
    #[error("rule {index}: {field} must be a single character or \"EPS\", got {value:?}")]
    NotASymbol {
        index: usize,
        field: &'static str,
        value: String,
    },
}
