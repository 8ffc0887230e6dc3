//! Lexing failures.

use thiserror::Error;

/// Input the tokenizer cannot cover with a token.
///
/// Positions are 1-based line/column plus a byte offset, matching
/// [`crate::Token`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unterminated string literal at line {line} col {column}, offset {offset}")]
    UnterminatedString { line: u32, column: u32, offset: u32 },

    #[error("unterminated comment at line {line} col {column}, offset {offset}")]
    UnterminatedComment { line: u32, column: u32, offset: u32 },

    #[error("unterminated regular expression at line {line} col {column}, offset {offset}")]
    UnterminatedRegExp { line: u32, column: u32, offset: u32 },

    #[error("unexpected character {found:?} at line {line} col {column}, offset {offset}")]
    UnexpectedCharacter {
        found: char,
        line: u32,
        column: u32,
        offset: u32,
    },
}
