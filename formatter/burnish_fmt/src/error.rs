//! Formatting failures.

use burnish_lexer::LexError;
use thiserror::Error;

/// Why a source could not be formatted.
///
/// Lexing failures pass through unchanged; the only failure the formatter
/// adds on top is a byte order mark somewhere other than the very start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("misplaced byte order mark at line {line} col {column}, offset {offset}")]
    MisplacedByteOrderMark { line: u32, column: u32, offset: u32 },
}
