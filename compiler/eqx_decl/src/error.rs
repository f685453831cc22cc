//! Extraction errors.

use eqx_scanner::{Position, Scanner};

/// Why a declaration line could not be read.
///
/// `at` is the position of the cursor when the failing probe was tried,
/// after any earlier keywords were consumed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("{at}: expected {expected}")]
    ExpectedKeyword {
        /// Human-readable list of accepted keywords, e.g. "`let` or `var`".
        expected: &'static str,
        at: Position,
    },

    #[error("{at}: expected a name before `{delimiter}`")]
    MissingDelimiter { delimiter: char, at: Position },
}

impl ParseError {
    pub(crate) fn expected_keyword(scanner: &Scanner<'_>, expected: &'static str) -> Self {
        ParseError::ExpectedKeyword {
            expected,
            at: scanner.position(),
        }
    }

    pub(crate) fn missing_delimiter(scanner: &Scanner<'_>, delimiter: char) -> Self {
        ParseError::MissingDelimiter {
            delimiter,
            at: scanner.position(),
        }
    }

    /// Where the failing probe was tried.
    pub fn position(&self) -> &Position {
        match self {
            ParseError::ExpectedKeyword { at, .. } | ParseError::MissingDelimiter { at, .. } => at,
        }
    }
}
