//! Keyword rules.
//!
//! Keywords that shape layout get their own handling; the rest copy with a
//! trailing space. Reserved words used as property names never reach this
//! module, the lexer already reclassified them as identifiers.

use burnish_lexer::{Keyword, Token};

use crate::buffer::OutputBuffer;
use crate::context::ContextKind;

pub(super) fn format(buffer: &mut OutputBuffer<'_>, token: &Token, keyword: Keyword) {
    match keyword {
        Keyword::Case | Keyword::Default => case_label(buffer, token, keyword),

        Keyword::Catch | Keyword::Else | Keyword::Finally => {
            block_continuation(buffer, token, keyword);
        }

        Keyword::For | Keyword::Function | Keyword::If | Keyword::Switch => {
            control_flow(buffer, token, keyword);
        }

        Keyword::Return | Keyword::Throw | Keyword::Try | Keyword::While => {
            statement_start(buffer, token);
        }

        Keyword::Var => var_declaration(buffer, token),

        _ => super::copy_and_space(buffer, token),
    }
}

/// `case` and `default` labels sit one level out from their statements.
/// Consecutive labels share a group; a label after statements gets a blank
/// line. In strict mode labels align with the switch itself.
fn case_label(buffer: &mut OutputBuffer<'_>, token: &Token, keyword: Keyword) {
    // Inside an object literal this is a property name: `{ default: 1 }`.
    if buffer.context() == Some(ContextKind::Brace) {
        super::copy_and_space(buffer, token);
        return;
    }

    buffer.remove_whitespace();

    if !matches!(buffer.last_text(), Some("{" | ":")) {
        buffer.add_newline();
    }

    if buffer.options().strict {
        let frame = buffer.pop_context();
        buffer.add_newline();

        if let Some(frame) = frame {
            buffer.restore_context(frame);
        }
    } else {
        if buffer.context() != Some(ContextKind::SwitchBlock) {
            buffer.pop_context();
        }

        buffer.add_newline();

        let kind = if keyword == Keyword::Default {
            ContextKind::Default
        } else {
            ContextKind::Case
        };
        buffer.push_context(kind);
    }

    super::copy_and_space(buffer, token);
}

/// `else`, `catch` and `finally` continue the construct before them: on
/// the same line as a closing brace, on a fresh line otherwise.
fn block_continuation(buffer: &mut OutputBuffer<'_>, token: &Token, keyword: Keyword) {
    buffer.remove_whitespace();

    if buffer.options().else_newline {
        buffer.add_newline();
    } else if let Some(last) = buffer.last_text() {
        if last == "}" {
            buffer.add_space();
        } else {
            buffer.add_newline();
        }
    }

    super::copy_and_space(buffer, token);

    let kind = match keyword {
        Keyword::Catch => ContextKind::Catch,
        Keyword::Finally => ContextKind::Finally,
        _ => ContextKind::Else,
    };
    buffer.push_flat_context(kind);
}

/// `for`, `function`, `if` and `switch` open a frame the upcoming
/// parenthesis and brace key off.
fn control_flow(buffer: &mut OutputBuffer<'_>, token: &Token, keyword: Keyword) {
    buffer.add_conditional_newline();
    super::copy_and_space(buffer, token);

    let kind = match keyword {
        Keyword::For => ContextKind::For,
        Keyword::Function => ContextKind::Function,
        Keyword::Switch => ContextKind::Switch,
        _ => ContextKind::If,
    };
    buffer.push_flat_context(kind);
}

/// Statements that stand apart from whatever ended before them.
fn statement_start(buffer: &mut OutputBuffer<'_>, token: &Token) {
    buffer.add_conditional_newline();
    super::copy_and_space(buffer, token);
}

/// Declared variables indent under their `var`.
fn var_declaration(buffer: &mut OutputBuffer<'_>, token: &Token) {
    super::copy_and_space(buffer, token);
    buffer.push_context(ContextKind::Var);
}
