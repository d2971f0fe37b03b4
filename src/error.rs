//! Errors reported at the public entry points.
//!
//! The grammar itself only knows "matched" and "did not match". Once a
//! top level production fails, the failure is reported as a
//! [`SyntaxError`] naming the grammar that was attempted and carrying the
//! original text for display.

use std::fmt::{self, Display};

use thiserror::Error;

use crate::util::ascii_to_string;

/// The productions that can be invoked as entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Grammar {
    Mailbox,
    Address,
    AddressList,
    DateTime,
}

impl Grammar {
    /// RFC 5322 rule name.
    pub fn rule_name(self) -> &'static str {
        match self {
            Grammar::Mailbox => "mailbox",
            Grammar::Address => "address",
            Grammar::AddressList => "address-list",
            Grammar::DateTime => "date-time",
        }
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rule_name())
    }
}

/// Input did not match a grammar.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("syntax error in {grammar} at position {position}: {text:?}")]
pub struct SyntaxError {
    /// Grammar that was attempted.
    pub grammar: Grammar,
    /// The whole input, bytes outside ASCII replaced.
    pub text: String,
    /// Offset the failed attempt started at.
    pub position: usize,
}

impl SyntaxError {
    pub(crate) fn new(grammar: Grammar, input: &[u8], position: usize) -> Self {
        SyntaxError {
            grammar,
            text: ascii_to_string(input).into_owned(),
            position,
        }
    }
}
