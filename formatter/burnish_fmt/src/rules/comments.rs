//! Comment rules.
//!
//! Single-line comments either trail the code they annotate or start a
//! line of their own. Multi-line comments are reflowed so every line is
//! aligned under the opener with a leading star.

use burnish_lexer::{Token, TokenKind};

use crate::buffer::OutputBuffer;
use crate::fragment::FragmentKind;

/// A comment that shared a line with code keeps trailing it, separated by
/// the comment gutter. One that had a line of its own keeps that too, with
/// a blank line in front unless it follows an opener or another comment.
pub(super) fn line(buffer: &mut OutputBuffer<'_>, tokens: &[Token], index: usize, token: &Token) {
    if starts_on_code_line(tokens, index) || !buffer.at_line_start() {
        buffer.remove_whitespace();

        let gutter = buffer.options().comment_gutter.clone();
        buffer.push_fragment(FragmentKind::CommentGutter, gutter);
        buffer.push_fragment(FragmentKind::StatementComment, token.text.clone());
    } else {
        if buffer.blank_line_before_comment() {
            buffer.remove_whitespace();
            buffer.add_newline();
            buffer.add_newline();
        }

        buffer.push_fragment(FragmentKind::LineComment, token.text.clone());
    }

    buffer.add_newline();
}

/// Whether the source had code before this comment on the same line.
/// Comments right after `{` or `[` hang under the opener instead.
fn starts_on_code_line(tokens: &[Token], index: usize) -> bool {
    for earlier in tokens[..index].iter().rev() {
        match earlier.kind {
            TokenKind::LineTerminator => return false,
            TokenKind::Whitespace => {}
            _ => return !matches!(earlier.text.as_str(), "{" | "["),
        }
    }

    false
}

pub(super) fn block(buffer: &mut OutputBuffer<'_>, token: &Token) {
    let indentation = buffer.indentation();
    let newline = buffer.options().newline.clone();
    let text = reflow(&token.text, &newline, &indentation);

    if buffer.blank_line_before_comment() {
        buffer.remove_whitespace();
        buffer.add_newline();
        buffer.add_newline();
        buffer.add_newline();
    }

    buffer.push_fragment(FragmentKind::BlockComment, text);
    buffer.add_newline();
}

/// Rebuild a multi-line comment: newlines standardized, line ends trimmed,
/// every continuation line starting with an aligned ` *`. Spacing before
/// the closing tag survives, and a closer that had its own line keeps it.
fn reflow(text: &str, newline: &str, indentation: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let body = normalized.strip_suffix("*/").unwrap_or(&normalized);

    let trimmed = body.trim_end_matches(is_gap);
    let closer_gap = &body[trimmed.len()..];

    let (body, closer) = match trimmed.strip_suffix('\n') {
        Some(inner) => (inner, format!("\n{indentation} ")),
        None => (trimmed, closer_gap.to_string()),
    };

    let mut out = String::with_capacity(text.len());
    let mut lines = body.split('\n');

    if let Some(first) = lines.next() {
        out.push_str(first.trim_end_matches(is_gap));
    }

    for raw in lines {
        let line = raw.trim_matches(is_gap);
        let line = line.strip_prefix('*').unwrap_or(line);

        out.push_str(newline);
        out.push_str(indentation);
        out.push_str(" *");

        if !line.is_empty() {
            if !line.starts_with(' ') {
                out.push(' ');
            }

            out.push_str(line);
        }
    }

    out.push_str(&closer);
    out.push_str("*/");
    out
}

fn is_gap(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0C')
}
