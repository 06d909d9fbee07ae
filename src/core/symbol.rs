//! Alphabet symbols and the distinguished epsilon value.
//!
//! Every symbol position in a rule is either a real one-character symbol
//! or epsilon. Epsilon is its own enum variant, never a sentinel character,
//! so internal comparisons cannot accidentally match a literal marker
//! string from the external machine format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single symbol drawn from an alphabet, or epsilon.
///
/// Epsilon compares equal only to epsilon. It is never a wildcard over
/// real symbols: a rule expecting epsilon input matches only the virtual
/// position past the end of the chain, and a rule expecting an epsilon
/// stack top matches only the empty stack.
///
/// # Example
///
/// ```rust
/// use pushdown::Symbol;
///
/// let a = Symbol::Char('a');
/// assert!(!a.is_epsilon());
/// assert_eq!(a.as_char(), Some('a'));
///
/// assert!(Symbol::Epsilon.is_epsilon());
/// assert_ne!(Symbol::Epsilon, Symbol::Char('a'));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Symbol {
    /// The distinguished "no symbol" value.
    Epsilon,
    /// A real one-character symbol.
    Char(char),
}

impl Symbol {
    /// Check whether this symbol is epsilon.
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Self::Epsilon)
    }

    /// Get the underlying character, or `None` for epsilon.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Epsilon => None,
            Self::Char(c) => Some(*c),
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epsilon => write!(f, "ε"),
            Self::Char(c) => write!(f, "{c}"),
        }
    }
}
