//! Per-token formatting rules.
//!
//! Dispatch is exhaustive over [`TokenKind`]: every kind the lexer can
//! produce has a rule here, so unknown input is impossible by
//! construction. Most rules copy the token and add a space; the
//! interesting ones live in [`keywords`], [`punctuators`] and
//! [`comments`].

mod comments;
mod keywords;
mod punctuators;

use burnish_lexer::{Token, TokenKind};

use crate::buffer::OutputBuffer;
use crate::error::FormatError;
use crate::fragment::FragmentKind;
use crate::options::{requote, BomMode};

/// Apply the rule for one token.
pub(crate) fn dispatch(
    buffer: &mut OutputBuffer<'_>,
    tokens: &[Token],
    index: usize,
    token: &Token,
) -> Result<(), FormatError> {
    match token.kind {
        // Source spacing never survives; rules rebuild all of it.
        TokenKind::Whitespace | TokenKind::LineTerminator => {}

        TokenKind::Bom => {
            if index > 0 {
                return Err(FormatError::MisplacedByteOrderMark {
                    line: token.line,
                    column: token.column,
                    offset: token.offset,
                });
            }

            // Add mode already emitted one before any token.
            if buffer.options().bom == BomMode::Preserve {
                buffer.push_fragment(FragmentKind::Bom, "\u{FEFF}");
            }
        }

        TokenKind::Shebang => {
            copy(buffer, token);
            buffer.add_newline();
        }

        TokenKind::Keyword(keyword) => keywords::format(buffer, token, keyword),

        TokenKind::Punctuator(punctuator) => punctuators::format(buffer, token, punctuator),

        TokenKind::ImplicitSemicolon => punctuators::semicolon(buffer),

        TokenKind::SingleLineComment => comments::line(buffer, tokens, index, token),

        TokenKind::MultiLineComment => comments::block(buffer, token),

        TokenKind::StringLiteral => {
            let text = requote(&token.text, buffer.options().quote_style);
            buffer.push_fragment(FragmentKind::StringLiteral, text);
            buffer.add_space();
        }

        TokenKind::IdentifierName
        | TokenKind::NumericLiteral
        | TokenKind::BooleanLiteral
        | TokenKind::NullLiteral
        | TokenKind::RegularExpressionLiteral => copy_and_space(buffer, token),
    }

    Ok(())
}

/// The fragment kind a copied token lands as.
fn fragment_kind(kind: TokenKind) -> FragmentKind {
    match kind {
        TokenKind::Bom => FragmentKind::Bom,
        TokenKind::Shebang => FragmentKind::Shebang,
        TokenKind::Keyword(_) => FragmentKind::Keyword,
        TokenKind::IdentifierName => FragmentKind::IdentifierName,
        TokenKind::Punctuator(_) => FragmentKind::Punctuator,
        TokenKind::ImplicitSemicolon => FragmentKind::Semicolon,
        TokenKind::StringLiteral => FragmentKind::StringLiteral,
        TokenKind::NumericLiteral => FragmentKind::NumericLiteral,
        TokenKind::BooleanLiteral => FragmentKind::BooleanLiteral,
        TokenKind::NullLiteral => FragmentKind::NullLiteral,
        TokenKind::RegularExpressionLiteral => FragmentKind::RegularExpressionLiteral,
        TokenKind::Whitespace => FragmentKind::Space,
        TokenKind::LineTerminator => FragmentKind::Newline,
        TokenKind::SingleLineComment => FragmentKind::LineComment,
        TokenKind::MultiLineComment => FragmentKind::BlockComment,
    }
}

fn copy(buffer: &mut OutputBuffer<'_>, token: &Token) {
    buffer.push_fragment(fragment_kind(token.kind), token.text.clone());
}

fn copy_and_space(buffer: &mut OutputBuffer<'_>, token: &Token) {
    copy(buffer, token);
    buffer.add_space();
}
