//! Punctuator rules.
//!
//! Braces, brackets and parentheses drive the context stack; semicolons
//! and commas end or continue lines; the remaining operators copy with a
//! trailing space.

use burnish_lexer::{Punctuator, Token, TokenKind};

use crate::buffer::OutputBuffer;
use crate::context::ContextKind;
use crate::fragment::FragmentKind;
use crate::options::{requote, PropertyQuoting, SuppressSpaceAfter};

pub(super) fn format(buffer: &mut OutputBuffer<'_>, token: &Token, punctuator: Punctuator) {
    match punctuator {
        Punctuator::LBrace => brace_open(buffer, token),
        Punctuator::RBrace => brace_close(buffer, token),
        Punctuator::LBracket => bracket_open(buffer, token),
        Punctuator::RBracket => bracket_close(buffer, token),
        Punctuator::LParen => paren_open(buffer, token),
        Punctuator::RParen => paren_close(buffer, token),
        Punctuator::Semicolon => semicolon(buffer),
        Punctuator::Comma => comma(buffer, token),
        Punctuator::Colon => colon(buffer, token),
        Punctuator::Plus | Punctuator::Minus => plus_minus(buffer, token),
        Punctuator::PlusPlus | Punctuator::MinusMinus => increment(buffer, token),

        // Periods join member accesses tightly on both sides.
        Punctuator::Dot => {
            buffer.remove_whitespace();
            super::copy(buffer, token);
        }

        // Logical not binds tightly to its operand.
        Punctuator::Bang => super::copy(buffer, token),

        Punctuator::Question => {
            buffer.push_flat_context(ContextKind::Ternary);
            super::copy_and_space(buffer, token);
        }

        _ => super::copy_and_space(buffer, token),
    }
}

fn brace_open(buffer: &mut OutputBuffer<'_>, token: &Token) {
    let block = buffer.context().and_then(ContextKind::block_kind);

    match block {
        Some(kind) => buffer.push_context(kind),
        None => buffer.push_context(ContextKind::Brace),
    }

    super::copy(buffer, token);
    buffer.add_newline();
}

fn brace_close(buffer: &mut OutputBuffer<'_>, token: &Token) {
    buffer.pop_statement_contexts();

    // The block frame, or the trailing case label inside a switch.
    buffer.pop_context();
    buffer.remove_whitespace();

    if buffer.context() == Some(ContextKind::SwitchBlock) {
        buffer.pop_context();
    }

    let mut ends_control_flow = false;

    if buffer.context().is_some_and(ContextKind::opened_by_keyword) {
        buffer.pop_context();

        // An if that hangs off an else closes the else as well.
        if buffer.context() == Some(ContextKind::Else) {
            buffer.pop_context();
        }

        ends_control_flow = true;
    }

    if buffer.last_text() != Some("{") {
        buffer.add_newline();
    }

    super::copy(buffer, token);
    buffer.add_newline();

    if ends_control_flow {
        buffer.add_newline();
    }
}

fn bracket_open(buffer: &mut OutputBuffer<'_>, token: &Token) {
    if buffer.is_array_literal() {
        buffer.push_context(ContextKind::Bracket);
        super::copy(buffer, token);
        buffer.add_newline();
    } else {
        buffer.remove_whitespace();
        buffer.push_flat_context(ContextKind::ArrayIndex);
        super::copy(buffer, token);
    }
}

fn bracket_close(buffer: &mut OutputBuffer<'_>, token: &Token) {
    let frame = buffer.pop_context();
    buffer.remove_whitespace();

    let subscript = frame.is_some_and(|f| f.kind == ContextKind::ArrayIndex);

    if !subscript && !matches!(buffer.last_text(), Some("(" | "{" | "[")) {
        buffer.add_newline();
    }

    super::copy_and_space(buffer, token);
}

/// What an opening parenthesis is doing, read off the previous fragment.
enum ParenRole {
    /// Grouping with nothing before it.
    Grouping,
    /// Arguments of a call on the preceding value.
    Call,
    /// Parameters right after the `function` keyword.
    Parameters,
    /// Condition or grouping after a keyword; the context decides.
    AfterKeyword,
}

fn paren_open(buffer: &mut OutputBuffer<'_>, token: &Token) {
    let role = match buffer.previous_meaningful() {
        None => ParenRole::Grouping,
        Some(prev)
            if prev.kind == FragmentKind::IdentifierName
                || matches!(prev.text.as_str(), "}" | ")" | "]") =>
        {
            ParenRole::Call
        }
        Some(prev) if prev.text == "function" => ParenRole::Parameters,
        Some(_) => ParenRole::AfterKeyword,
    };
    let suppress = buffer.options().suppress_space_after;

    match role {
        ParenRole::Grouping => buffer.push_flat_context(ContextKind::Paren),

        ParenRole::Call => {
            buffer.remove_whitespace();
            buffer.push_flat_context(ContextKind::FunctionArgs);
        }

        ParenRole::Parameters => {
            if suppress.contains(SuppressSpaceAfter::FUNCTION) {
                buffer.remove_whitespace();
            }

            buffer.push_flat_context(ContextKind::FunctionArgs);
        }

        ParenRole::AfterKeyword => match buffer.context() {
            Some(ContextKind::If) => {
                if suppress.contains(SuppressSpaceAfter::IF) {
                    buffer.remove_whitespace();
                }

                buffer.push_context(ContextKind::IfCondition);
            }
            Some(ContextKind::For) => {
                if suppress.contains(SuppressSpaceAfter::FOR) {
                    buffer.remove_whitespace();
                }

                buffer.push_flat_context(ContextKind::ForCondition);
            }
            // Covers switch, and also while and catch which open no frame.
            _ => {
                if suppress.contains(SuppressSpaceAfter::SWITCH) {
                    buffer.remove_whitespace();
                }

                buffer.push_flat_context(ContextKind::Paren);
            }
        },
    }

    super::copy(buffer, token);
}

fn paren_close(buffer: &mut OutputBuffer<'_>, token: &Token) {
    buffer.pop_statement_contexts();

    if buffer.context() == Some(ContextKind::FunctionArgsComma) {
        buffer.pop_context();
    }

    buffer.pop_context();
    buffer.remove_whitespace();

    super::copy_and_space(buffer, token);
}

/// Semicolons end the statement they follow. Inside a `for` head they
/// separate clauses with a space; everywhere else they break the line,
/// with a blank line after `var` statements and `"use strict"` prologues.
/// Implicit semicolons land here too and always render as `;`.
pub(super) fn semicolon(buffer: &mut OutputBuffer<'_>) {
    let old_context = buffer.context();

    buffer.pop_statement_contexts();
    buffer.remove_whitespace();

    let after_prologue = matches!(
        buffer.last_text(),
        Some("\"use strict\"" | "'use strict'")
    );

    buffer.push_fragment(FragmentKind::Semicolon, ";");

    if buffer.context() == Some(ContextKind::ForCondition) {
        buffer.add_space();
    } else {
        if old_context == Some(ContextKind::Var) || after_prologue {
            buffer.add_newline();
        }

        buffer.add_newline();
    }
}

fn comma(buffer: &mut OutputBuffer<'_>, token: &Token) {
    buffer.remove_whitespace();

    if buffer.context() == Some(ContextKind::Ternary) {
        buffer.pop_context();
    }

    super::copy(buffer, token);

    match buffer.context() {
        // First comma of an argument list; later lines in the list indent
        // off this marker frame.
        Some(ContextKind::FunctionArgs) => {
            buffer.push_flat_context(ContextKind::FunctionArgsComma);
            buffer.add_space();
        }

        Some(
            ContextKind::FunctionArgsComma | ContextKind::Var | ContextKind::ForCondition,
        ) => buffer.add_space(),

        // Object and array members get one line each.
        Some(ContextKind::Brace | ContextKind::Bracket) => buffer.add_newline(),

        // Comma operator: continuation lines indent one level.
        _ => {
            buffer.push_context(ContextKind::CommaOperator);
            buffer.add_newline();
            buffer.pop_context();
        }
    }
}

fn colon(buffer: &mut OutputBuffer<'_>, token: &Token) {
    // A `catch` property name left a frame behind: `{ catch: false }`.
    if buffer.context() == Some(ContextKind::Catch) {
        buffer.pop_context();
    }

    if matches!(
        buffer.context(),
        Some(ContextKind::SwitchBlock | ContextKind::Case | ContextKind::Default)
    ) {
        buffer.remove_whitespace();
        super::copy(buffer, token);
        buffer.add_newline();
        return;
    }

    if buffer.context() != Some(ContextKind::Ternary) {
        buffer.remove_whitespace();
        rewrite_property_name(buffer);
    }

    super::copy_and_space(buffer, token);
}

/// Apply the property quoting option to the name fragment before a colon.
fn rewrite_property_name(buffer: &mut OutputBuffer<'_>) {
    match buffer.options().property_quoting {
        PropertyQuoting::Add => {
            if matches!(
                buffer.last_kind(),
                Some(FragmentKind::IdentifierName | FragmentKind::Keyword)
            ) {
                let name = buffer.last_text().unwrap_or_default();
                let quoted = requote(&format!("\"{name}\""), buffer.options().quote_style);
                buffer.replace_last(FragmentKind::StringLiteral, quoted);
            }
        }

        PropertyQuoting::Remove => {
            let unquoted = match buffer.last() {
                Some(f) if f.kind == FragmentKind::StringLiteral && f.text.len() >= 2 => {
                    let inner = &f.text[1..f.text.len() - 1];

                    if is_safe_property_name(inner, buffer.options().strict) {
                        Some(inner.to_string())
                    } else {
                        None
                    }
                }
                _ => None,
            };

            if let Some(name) = unquoted {
                buffer.replace_last(FragmentKind::IdentifierName, name);
            }
        }

        PropertyQuoting::Preserve => {}
    }
}

/// True when the quoted body lexes as exactly one plain identifier, so the
/// quotes are redundant. Strict mode keeps quotes on names with a leading
/// or trailing underscore.
fn is_safe_property_name(name: &str, strict: bool) -> bool {
    if strict && (name.starts_with('_') || name.ends_with('_')) {
        return false;
    }

    match burnish_lexer::lex(name) {
        Ok(tokens) => {
            matches!(tokens.as_slice(), [token] if token.kind == TokenKind::IdentifierName)
        }
        Err(_) => false,
    }
}

/// `+` and `-` as signs bind tightly; as arithmetic they get a space.
fn plus_minus(buffer: &mut OutputBuffer<'_>, token: &Token) {
    let unary = buffer.in_unary_position();

    super::copy(buffer, token);

    if !unary {
        buffer.add_space();
    }
}

fn increment(buffer: &mut OutputBuffer<'_>, token: &Token) {
    if !buffer.options().suppress_space_with_inc_dec {
        super::copy_and_space(buffer, token);
        return;
    }

    let prefix = buffer
        .previous_meaningful()
        .is_none_or(|prev| prev.kind != FragmentKind::IdentifierName);

    if prefix {
        super::copy(buffer, token);
    } else {
        buffer.remove_whitespace();
        super::copy_and_space(buffer, token);
    }
}
