//! The decoded machine-description record and its conversion into a
//! [`Machine`].
//!
//! The external format is a JSON object with `states`, `alphabet`,
//! `in_stack`, optional `in_transform` (transducer variant), `rules` as
//! 5- or 6-element string tuples, `start`, `start_stack`, and `end`. The
//! reserved literal `"EPS"` (and the bare glyph `"ε"`, which the format
//! has always treated the same way) denotes epsilon in the symbol fields;
//! conversion canonicalizes it into [`Symbol::Epsilon`] so the marker
//! string never leaks into comparisons.

use crate::builder::error::MalformedMachine;
use crate::core::{Machine, Rule, Symbol};
use serde::{Deserialize, Serialize};

/// Reserved epsilon marker of the external file format.
const EPSILON_MARKER: &str = "EPS";
/// The epsilon glyph, equivalent to the marker in every symbol field.
const EPSILON_GLYPH: &str = "ε";

/// A machine description as decoded from external input.
///
/// This is the loader-facing shape: plain vectors of strings exactly as
/// they appear in the file format, before epsilon canonicalization. Use
/// [`Machine::try_from`] (or [`Machine::from_json`]) to build the
/// canonical immutable machine from it.
///
/// # Example
///
/// ```rust
/// use pushdown::{Machine, MachineDescription};
///
/// let description = MachineDescription::from_json(
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
/// let machine = Machine::try_from(description).unwrap();
/// assert_eq!(machine.rules().len(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MachineDescription {
    /// State labels.
    pub states: Vec<String>,
    /// Input alphabet.
    pub alphabet: Vec<char>,
    /// Stack alphabet.
    pub in_stack: Vec<char>,
    /// Output alphabet; present only for the transducer variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_transform: Option<Vec<char>>,
    /// Rule tuples: `[from, input, stack_top, to, push]` plus an optional
    /// sixth output field.
    pub rules: Vec<Vec<String>>,
    /// Start state.
    pub start: String,
    /// Start stack symbol.
    pub start_stack: char,
    /// Accepting end state.
    pub end: String,
}

impl MachineDescription {
    /// Decode a description from JSON text.
    pub fn from_json(text: &str) -> Result<Self, MalformedMachine> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode a description from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, MalformedMachine> {
        Ok(serde_json::from_value(value)?)
    }
}

impl Machine {
    /// Build a machine directly from JSON text.
    pub fn from_json(text: &str) -> Result<Self, MalformedMachine> {
        MachineDescription::from_json(text)?.try_into()
    }

    /// Build a machine from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, MalformedMachine> {
        MachineDescription::from_value(value)?.try_into()
    }
}

impl TryFrom<MachineDescription> for Machine {
    type Error = MalformedMachine;

    /// Canonicalize a decoded description into an immutable machine.
    ///
    /// Symbols are trusted as given: no cross-check against the declared
    /// alphabets or state list is performed. Only the shape is enforced:
    /// rule arity and one-character symbol fields.
    fn try_from(description: MachineDescription) -> Result<Self, Self::Error> {
        let rules = description
            .rules
            .iter()
            .enumerate()
            .map(|(index, fields)| decode_rule(index, fields))
            .collect::<Result<Vec<Rule>, MalformedMachine>>()?;

        Ok(Self {
            states: description.states,
            input_alphabet: description.alphabet,
            stack_alphabet: description.in_stack,
            output_alphabet: description.in_transform,
            rules,
            start_state: description.start,
            start_stack: description.start_stack,
            end_state: description.end,
        })
    }
}

fn decode_rule(index: usize, fields: &[String]) -> Result<Rule, MalformedMachine> {
    if fields.len() != 5 && fields.len() != 6 {
        return Err(MalformedMachine::RuleArity {
            index,
            found: fields.len(),
        });
    }

    let output = match fields.get(5) {
        Some(raw) => decode_symbol(raw, index, "output")?,
        None => Symbol::Epsilon,
    };

    Ok(Rule {
        from: fields[0].clone(),
        input: decode_symbol(&fields[1], index, "input")?,
        stack_top: decode_symbol(&fields[2], index, "stack top")?,
        to: fields[3].clone(),
        push: decode_push(&fields[4]),
        output,
    })
}

/// Canonicalize a single-symbol field: the epsilon markers become
/// [`Symbol::Epsilon`], anything else must be exactly one character.
fn decode_symbol(
    raw: &str,
    index: usize,
    field: &'static str,
) -> Result<Symbol, MalformedMachine> {
    if raw == EPSILON_MARKER || raw == EPSILON_GLYPH {
        return Ok(Symbol::Epsilon);
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Symbol::Char(c)),
        _ => Err(MalformedMachine::NotASymbol {
            index,
            field,
            value: raw.to_string(),
        }),
    }
}

/// Canonicalize the push field: the epsilon markers mean "push nothing";
/// any other value is a sequence of stack symbols pushed left to right.
fn decode_push(raw: &str) -> Vec<char> {
    if raw == EPSILON_MARKER || raw == EPSILON_GLYPH {
        return Vec::new();
    }
    raw.chars().collect()
}
