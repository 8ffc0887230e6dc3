//! JavaScript lexer for burnish, built on logos.
//!
//! The lexer covers the ES5 lexical grammar and keeps everything the
//! formatter needs to reconstruct layout decisions:
//! - Whitespace, line terminators and comments are real tokens, not trivia.
//! - `/` is re-scanned by hand as a regular expression literal whenever the
//!   previous meaningful token cannot end an expression.
//! - The restricted productions of automatic semicolon insertion yield
//!   zero-width [`TokenKind::ImplicitSemicolon`] tokens.
//! - A leading U+FEFF and a `#!` line are recognized in a pre-pass. A byte
//!   order mark later in the source still lexes as its own token, leaving
//!   the caller to reject it.
//!
//! Identifiers are ASCII (plus `$` and `_`), like the rest of this
//! workspace's tooling.

mod error;
mod token;

pub use error::LexError;
pub use token::{Keyword, Punctuator, Token, TokenKind};

use logos::Logos;

/// Raw token from logos, before classification.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    // === Whitespace and line terminators ===
    #[regex(r"[ \t\x0B\x0C\u{A0}]+")]
    Whitespace,

    #[regex(r"\r\n|[\n\r\u{2028}\u{2029}]")]
    LineTerminator,

    // U+FEFF is its own token wherever it appears; the formatter decides
    // whether one is legal there.
    #[token("\u{FEFF}")]
    Bom,

    // === Comments ===
    #[regex(r"//[^\n\r\u{2028}\u{2029}]*")]
    SingleLineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    MultiLineComment,

    // A comment opener that never closes. The terminated pattern always
    // wins by length when a closer exists.
    #[regex(r"/\*([^*]|\*+[^*/])*\**")]
    UnterminatedComment,

    // === Keywords ===
    #[token("break")]
    Break,
    #[token("case")]
    Case,
    #[token("catch")]
    Catch,
    #[token("class")]
    Class,
    #[token("const")]
    Const,
    #[token("continue")]
    Continue,
    #[token("debugger")]
    Debugger,
    #[token("default")]
    Default,
    #[token("delete")]
    Delete,
    #[token("do")]
    Do,
    #[token("else")]
    Else,
    #[token("enum")]
    Enum,
    #[token("export")]
    Export,
    #[token("extends")]
    Extends,
    #[token("finally")]
    Finally,
    #[token("for")]
    For,
    #[token("function")]
    Function,
    #[token("if")]
    If,
    #[token("import")]
    Import,
    #[token("in")]
    In,
    #[token("instanceof")]
    Instanceof,
    #[token("new")]
    New,
    #[token("return")]
    Return,
    #[token("super")]
    Super,
    #[token("switch")]
    Switch,
    #[token("this")]
    This,
    #[token("throw")]
    Throw,
    #[token("try")]
    Try,
    #[token("typeof")]
    Typeof,
    #[token("var")]
    Var,
    #[token("void")]
    Void,
    #[token("while")]
    While,
    #[token("with")]
    With,

    // === Literal words ===
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,

    // === Identifiers ===
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    // === Numbers ===
    #[regex(r"0[xX][0-9a-fA-F]+")]
    HexNumber,
    #[regex(r"[0-9]+\.?[0-9]*([eE][+-]?[0-9]+)?")]
    Number,
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    FractionNumber,

    // === Strings ===
    #[regex(r#""([^"\\\n\r\u{2028}\u{2029}]|\\\r\n|\\.|\\\n)*""#)]
    DoubleString,
    #[regex(r"'([^'\\\n\r\u{2028}\u{2029}]|\\\r\n|\\.|\\\n)*'")]
    SingleString,

    #[regex(r#""([^"\\\n\r\u{2028}\u{2029}]|\\\r\n|\\.|\\\n)*"#)]
    UnterminatedDoubleString,
    #[regex(r"'([^'\\\n\r\u{2028}\u{2029}]|\\\r\n|\\.|\\\n)*")]
    UnterminatedSingleString,

    // === Punctuators ===
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(".")]
    Dot,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("===")]
    EqEqEq,
    #[token("!==")]
    NotEqEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("%")]
    Percent,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token(">>>")]
    UShr,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("=")]
    Eq,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("%=")]
    PercentEq,
    #[token("<<=")]
    ShlEq,
    #[token(">>=")]
    ShrEq,
    #[token(">>>=")]
    UShrEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,
    #[token("/")]
    Slash,
    #[token("/=")]
    SlashEq,
}

/// Lex the entire source into an ordered, gap-free token sequence.
///
/// Every character of the input is covered by exactly one token (implicit
/// semicolons are zero-width). Returns the first lexical problem found.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut line: u32 = 1;
    let mut column: u32 = 1;
    let mut base: u32 = 0;
    let mut input = source;

    if let Some(rest) = input.strip_prefix('\u{FEFF}') {
        tokens.push(Token::new(TokenKind::Bom, "\u{FEFF}", line, column, base));
        column += 1;
        base += to_u32('\u{FEFF}'.len_utf8());
        input = rest;
    }

    if input.starts_with("#!") {
        let end = input
            .find(|c: char| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
            .unwrap_or(input.len());
        let text = &input[..end];
        tokens.push(Token::new(TokenKind::Shebang, text, line, column, base));
        column += to_u32(text.chars().count());
        base += to_u32(end);
        input = &input[end..];
    }

    let mut lexer = RawToken::lexer(input);
    let mut last_meaningful: Option<TokenKind> = None;
    let mut newline_pending = false;

    while let Some(result) = lexer.next() {
        let start = lexer.span().start;
        let offset = base + to_u32(start);
        let slice = lexer.slice();

        let raw = match result {
            Ok(raw) => raw,
            Err(()) => {
                let found = slice.chars().next().unwrap_or('\u{FFFD}');
                return Err(LexError::UnexpectedCharacter {
                    found,
                    line,
                    column,
                    offset,
                });
            }
        };

        let (kind, text) = match raw {
            RawToken::UnterminatedDoubleString | RawToken::UnterminatedSingleString => {
                return Err(LexError::UnterminatedString {
                    line,
                    column,
                    offset,
                });
            }
            RawToken::UnterminatedComment => {
                return Err(LexError::UnterminatedComment {
                    line,
                    column,
                    offset,
                });
            }
            RawToken::Slash | RawToken::SlashEq if in_regex_position(last_meaningful) => {
                match scan_regex_body(&input[start + 1..]) {
                    Some(body_len) => {
                        let total = 1 + body_len;
                        lexer.bump(total - slice.len());
                        (
                            TokenKind::RegularExpressionLiteral,
                            &input[start..start + total],
                        )
                    }
                    None => {
                        return Err(LexError::UnterminatedRegExp {
                            line,
                            column,
                            offset,
                        });
                    }
                }
            }
            other => (convert(other), slice),
        };

        // After `.` every word is a property name (`x.default` is valid
        // member access), so reserved words lex as identifiers there.
        let kind = if matches!(last_meaningful, Some(TokenKind::Punctuator(Punctuator::Dot)))
            && matches!(
                kind,
                TokenKind::Keyword(_) | TokenKind::BooleanLiteral | TokenKind::NullLiteral
            ) {
            TokenKind::IdentifierName
        } else {
            kind
        };

        if newline_pending && kind.is_meaningful() && wants_implicit_semicolon(last_meaningful, kind)
        {
            tokens.push(Token::new(
                TokenKind::ImplicitSemicolon,
                "",
                line,
                column,
                offset,
            ));
        }

        tokens.push(Token::new(kind, text, line, column, offset));

        if kind.is_meaningful() {
            last_meaningful = Some(kind);
            newline_pending = false;
        } else if kind == TokenKind::LineTerminator {
            newline_pending = true;
        }

        advance_position(&mut line, &mut column, text);
    }

    Ok(tokens)
}

/// Map a raw token to its public kind.
fn convert(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Whitespace => TokenKind::Whitespace,
        RawToken::LineTerminator => TokenKind::LineTerminator,
        RawToken::Bom => TokenKind::Bom,
        RawToken::SingleLineComment => TokenKind::SingleLineComment,
        RawToken::MultiLineComment => TokenKind::MultiLineComment,

        RawToken::Break => TokenKind::Keyword(Keyword::Break),
        RawToken::Case => TokenKind::Keyword(Keyword::Case),
        RawToken::Catch => TokenKind::Keyword(Keyword::Catch),
        RawToken::Class => TokenKind::Keyword(Keyword::Class),
        RawToken::Const => TokenKind::Keyword(Keyword::Const),
        RawToken::Continue => TokenKind::Keyword(Keyword::Continue),
        RawToken::Debugger => TokenKind::Keyword(Keyword::Debugger),
        RawToken::Default => TokenKind::Keyword(Keyword::Default),
        RawToken::Delete => TokenKind::Keyword(Keyword::Delete),
        RawToken::Do => TokenKind::Keyword(Keyword::Do),
        RawToken::Else => TokenKind::Keyword(Keyword::Else),
        RawToken::Enum => TokenKind::Keyword(Keyword::Enum),
        RawToken::Export => TokenKind::Keyword(Keyword::Export),
        RawToken::Extends => TokenKind::Keyword(Keyword::Extends),
        RawToken::Finally => TokenKind::Keyword(Keyword::Finally),
        RawToken::For => TokenKind::Keyword(Keyword::For),
        RawToken::Function => TokenKind::Keyword(Keyword::Function),
        RawToken::If => TokenKind::Keyword(Keyword::If),
        RawToken::Import => TokenKind::Keyword(Keyword::Import),
        RawToken::In => TokenKind::Keyword(Keyword::In),
        RawToken::Instanceof => TokenKind::Keyword(Keyword::Instanceof),
        RawToken::New => TokenKind::Keyword(Keyword::New),
        RawToken::Return => TokenKind::Keyword(Keyword::Return),
        RawToken::Super => TokenKind::Keyword(Keyword::Super),
        RawToken::Switch => TokenKind::Keyword(Keyword::Switch),
        RawToken::This => TokenKind::Keyword(Keyword::This),
        RawToken::Throw => TokenKind::Keyword(Keyword::Throw),
        RawToken::Try => TokenKind::Keyword(Keyword::Try),
        RawToken::Typeof => TokenKind::Keyword(Keyword::Typeof),
        RawToken::Var => TokenKind::Keyword(Keyword::Var),
        RawToken::Void => TokenKind::Keyword(Keyword::Void),
        RawToken::While => TokenKind::Keyword(Keyword::While),
        RawToken::With => TokenKind::Keyword(Keyword::With),

        RawToken::True | RawToken::False => TokenKind::BooleanLiteral,
        RawToken::Null => TokenKind::NullLiteral,

        RawToken::Ident => TokenKind::IdentifierName,

        RawToken::HexNumber | RawToken::Number | RawToken::FractionNumber => {
            TokenKind::NumericLiteral
        }

        RawToken::DoubleString | RawToken::SingleString => TokenKind::StringLiteral,

        RawToken::LBrace => TokenKind::Punctuator(Punctuator::LBrace),
        RawToken::RBrace => TokenKind::Punctuator(Punctuator::RBrace),
        RawToken::LParen => TokenKind::Punctuator(Punctuator::LParen),
        RawToken::RParen => TokenKind::Punctuator(Punctuator::RParen),
        RawToken::LBracket => TokenKind::Punctuator(Punctuator::LBracket),
        RawToken::RBracket => TokenKind::Punctuator(Punctuator::RBracket),
        RawToken::Dot => TokenKind::Punctuator(Punctuator::Dot),
        RawToken::Semicolon => TokenKind::Punctuator(Punctuator::Semicolon),
        RawToken::Comma => TokenKind::Punctuator(Punctuator::Comma),
        RawToken::Lt => TokenKind::Punctuator(Punctuator::Lt),
        RawToken::Gt => TokenKind::Punctuator(Punctuator::Gt),
        RawToken::LtEq => TokenKind::Punctuator(Punctuator::LtEq),
        RawToken::GtEq => TokenKind::Punctuator(Punctuator::GtEq),
        RawToken::EqEq => TokenKind::Punctuator(Punctuator::EqEq),
        RawToken::NotEq => TokenKind::Punctuator(Punctuator::NotEq),
        RawToken::EqEqEq => TokenKind::Punctuator(Punctuator::EqEqEq),
        RawToken::NotEqEq => TokenKind::Punctuator(Punctuator::NotEqEq),
        RawToken::Plus => TokenKind::Punctuator(Punctuator::Plus),
        RawToken::Minus => TokenKind::Punctuator(Punctuator::Minus),
        RawToken::Star => TokenKind::Punctuator(Punctuator::Star),
        RawToken::Percent => TokenKind::Punctuator(Punctuator::Percent),
        RawToken::PlusPlus => TokenKind::Punctuator(Punctuator::PlusPlus),
        RawToken::MinusMinus => TokenKind::Punctuator(Punctuator::MinusMinus),
        RawToken::Shl => TokenKind::Punctuator(Punctuator::Shl),
        RawToken::Shr => TokenKind::Punctuator(Punctuator::Shr),
        RawToken::UShr => TokenKind::Punctuator(Punctuator::UShr),
        RawToken::Amp => TokenKind::Punctuator(Punctuator::Amp),
        RawToken::Pipe => TokenKind::Punctuator(Punctuator::Pipe),
        RawToken::Caret => TokenKind::Punctuator(Punctuator::Caret),
        RawToken::Bang => TokenKind::Punctuator(Punctuator::Bang),
        RawToken::Tilde => TokenKind::Punctuator(Punctuator::Tilde),
        RawToken::AmpAmp => TokenKind::Punctuator(Punctuator::AmpAmp),
        RawToken::PipePipe => TokenKind::Punctuator(Punctuator::PipePipe),
        RawToken::Question => TokenKind::Punctuator(Punctuator::Question),
        RawToken::Colon => TokenKind::Punctuator(Punctuator::Colon),
        RawToken::Eq => TokenKind::Punctuator(Punctuator::Eq),
        RawToken::PlusEq => TokenKind::Punctuator(Punctuator::PlusEq),
        RawToken::MinusEq => TokenKind::Punctuator(Punctuator::MinusEq),
        RawToken::StarEq => TokenKind::Punctuator(Punctuator::StarEq),
        RawToken::PercentEq => TokenKind::Punctuator(Punctuator::PercentEq),
        RawToken::ShlEq => TokenKind::Punctuator(Punctuator::ShlEq),
        RawToken::ShrEq => TokenKind::Punctuator(Punctuator::ShrEq),
        RawToken::UShrEq => TokenKind::Punctuator(Punctuator::UShrEq),
        RawToken::AmpEq => TokenKind::Punctuator(Punctuator::AmpEq),
        RawToken::PipeEq => TokenKind::Punctuator(Punctuator::PipeEq),
        RawToken::CaretEq => TokenKind::Punctuator(Punctuator::CaretEq),
        RawToken::Slash => TokenKind::Punctuator(Punctuator::Slash),
        RawToken::SlashEq => TokenKind::Punctuator(Punctuator::SlashEq),

        RawToken::UnterminatedComment
        | RawToken::UnterminatedDoubleString
        | RawToken::UnterminatedSingleString => {
            unreachable!("unterminated raw tokens are handled in the lexer loop")
        }
    }
}

/// True when a `/` here starts a regular expression, not division.
///
/// The decision uses only the previous meaningful token, the common
/// prev-token heuristic: after something that can end an expression the
/// slash divides, everywhere else it opens a regex. `}` counts as regex
/// position; a block statement followed by a regex is far more likely than
/// dividing an object literal.
fn in_regex_position(previous: Option<TokenKind>) -> bool {
    match previous {
        None => true,
        Some(TokenKind::Keyword(kw)) => !matches!(kw, Keyword::This | Keyword::Super),
        Some(TokenKind::Punctuator(p)) => !matches!(
            p,
            Punctuator::RParen
                | Punctuator::RBracket
                | Punctuator::PlusPlus
                | Punctuator::MinusMinus
        ),
        Some(_) => false,
    }
}

/// Scan a regular expression body starting right after the opening `/`.
///
/// Returns the byte length of body, closing `/` and flags, or `None` when
/// the literal is unterminated (end of input or a line terminator).
fn scan_regex_body(s: &str) -> Option<usize> {
    let mut in_class = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}') {
            return None;
        }

        if escaped {
            escaped = false;
            continue;
        }

        match c {
            '\\' => escaped = true,
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => {
                let mut end = i + 1;

                for (j, f) in s[i + 1..].char_indices() {
                    if f.is_ascii_alphanumeric() || f == '$' || f == '_' {
                        end = i + 1 + j + f.len_utf8();
                    } else {
                        break;
                    }
                }

                return Some(end);
            }
            _ => {}
        }
    }

    None
}

/// The restricted productions: a line break before `++`/`--`, or any line
/// break after `return`/`throw`/`break`/`continue`, terminates the
/// statement. Checked only when at least one line terminator separates the
/// two tokens; never at end of input.
fn wants_implicit_semicolon(previous: Option<TokenKind>, next: TokenKind) -> bool {
    match previous {
        None => false,
        Some(TokenKind::Keyword(
            Keyword::Return | Keyword::Throw | Keyword::Break | Keyword::Continue,
        )) => true,
        Some(prev) => {
            matches!(
                next,
                TokenKind::Punctuator(Punctuator::PlusPlus | Punctuator::MinusMinus)
            ) && can_end_expression(prev)
        }
    }
}

fn can_end_expression(kind: TokenKind) -> bool {
    match kind {
        TokenKind::IdentifierName
        | TokenKind::StringLiteral
        | TokenKind::NumericLiteral
        | TokenKind::BooleanLiteral
        | TokenKind::NullLiteral
        | TokenKind::RegularExpressionLiteral => true,
        TokenKind::Keyword(kw) => matches!(kw, Keyword::This | Keyword::Super),
        TokenKind::Punctuator(p) => matches!(
            p,
            Punctuator::RParen
                | Punctuator::RBrace
                | Punctuator::RBracket
                | Punctuator::PlusPlus
                | Punctuator::MinusMinus
        ),
        _ => false,
    }
}

/// Advance the 1-based position over `text`, treating `\r\n` as one break.
fn advance_position(line: &mut u32, column: &mut u32, text: &str) {
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                *line += 1;
                *column = 1;
            }
            '\n' | '\u{2028}' | '\u{2029}' => {
                *line += 1;
                *column = 1;
            }
            _ => *column += 1,
        }
    }
}

// Sources are bounded well below 4 GiB; saturate rather than panic.
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
