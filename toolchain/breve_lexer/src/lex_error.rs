//! Typed faults for constructs the dispatch recognizes but cannot lex yet.

use std::fmt;

use thiserror::Error;

/// A fault raised when scanning reaches a construct whose rules are not
/// implemented.
///
/// The fault carries the 1-based position of the offending character so a
/// caller can report it. [`try_tokenize`](crate::try_tokenize) surfaces the
/// fault as an error; [`tokenize`](crate::tokenize) degrades it to an
/// [`Unknown`](crate::TokenKind::Unknown) token and keeps scanning.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexError {
    /// An opening quote was found. Both string styles are recognized by
    /// the dispatch, but their scan rules do not exist yet.
    #[error("{flavor} string scanning is not implemented (line {row}, column {column})")]
    UnsupportedString {
        /// Which quoting style was encountered.
        flavor: StringFlavor,
        /// 1-based line of the opening quote.
        row: u32,
        /// 1-based column of the opening quote.
        column: u32,
    },
}

/// The two quoting styles of string values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum StringFlavor {
    /// `"…"` — escape-processing string.
    Basic,
    /// `'…'` — verbatim string.
    Literal,
}

impl fmt::Display for StringFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("basic"),
            Self::Literal => f.write_str("literal"),
        }
    }
}

impl LexError {
    /// Fault for an opening quote at the given position.
    #[cold]
    pub(crate) fn unsupported_string(flavor: StringFlavor, row: u32, column: u32) -> Self {
        Self::UnsupportedString {
            flavor,
            row,
            column,
        }
    }

    /// 1-based (line, column) where the fault was raised.
    pub fn position(&self) -> (u32, u32) {
        match self {
            Self::UnsupportedString { row, column, .. } => (*row, *column),
        }
    }
}
