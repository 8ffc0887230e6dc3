//! Token types produced by the lexer.

/// One lexical unit of JavaScript source.
///
/// `text` is the verbatim source slice; it is empty only for
/// [`TokenKind::ImplicitSemicolon`], which occupies no characters.
/// `line` and `column` are 1-based and counted in characters;
/// `offset` is a byte offset into the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32, offset: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            column,
            offset,
        }
    }
}

/// Token classification.
///
/// Keywords and punctuators carry their identity so that consumers can
/// match on them exhaustively instead of comparing source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// U+FEFF at the very start of the source.
    Bom,
    /// A `#!` line at the very start of the source (after an optional BOM).
    Shebang,
    Keyword(Keyword),
    IdentifierName,
    Punctuator(Punctuator),
    StringLiteral,
    NumericLiteral,
    BooleanLiteral,
    NullLiteral,
    RegularExpressionLiteral,
    /// One line terminator sequence (`\r\n` counts as one).
    LineTerminator,
    /// A run of horizontal whitespace.
    Whitespace,
    SingleLineComment,
    MultiLineComment,
    /// Zero-width semicolon synthesized by automatic semicolon insertion.
    ImplicitSemicolon,
}

impl TokenKind {
    /// Whitespace, line terminators and comments separate tokens but do not
    /// take part in expression structure.
    pub fn is_meaningful(self) -> bool {
        !matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::LineTerminator
                | TokenKind::SingleLineComment
                | TokenKind::MultiLineComment
                | TokenKind::Bom
                | TokenKind::Shebang
        )
    }
}

/// ES5 keywords plus the future reserved words.
///
/// `true`, `false` and `null` lex as literals, not keywords, and the
/// strict-mode-only reserved set (`let`, `yield`, ...) lexes as plain
/// identifiers, as it does in sloppy-mode ES5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Enum,
    Export,
    Extends,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    Instanceof,
    New,
    Return,
    Super,
    Switch,
    This,
    Throw,
    Try,
    Typeof,
    Var,
    Void,
    While,
    With,
}

/// ES5 punctuators, division operators included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuator {
    LBrace,       // {
    RBrace,       // }
    LParen,       // (
    RParen,       // )
    LBracket,     // [
    RBracket,     // ]
    Dot,          // .
    Semicolon,    // ;
    Comma,        // ,
    Lt,           // <
    Gt,           // >
    LtEq,         // <=
    GtEq,         // >=
    EqEq,         // ==
    NotEq,        // !=
    EqEqEq,       // ===
    NotEqEq,      // !==
    Plus,         // +
    Minus,        // -
    Star,         // *
    Percent,      // %
    PlusPlus,     // ++
    MinusMinus,   // --
    Shl,          // <<
    Shr,          // >>
    UShr,         // >>>
    Amp,          // &
    Pipe,         // |
    Caret,        // ^
    Bang,         // !
    Tilde,        // ~
    AmpAmp,       // &&
    PipePipe,     // ||
    Question,     // ?
    Colon,        // :
    Eq,           // =
    PlusEq,       // +=
    MinusEq,      // -=
    StarEq,       // *=
    PercentEq,    // %=
    ShlEq,        // <<=
    ShrEq,        // >>=
    UShrEq,       // >>>=
    AmpEq,        // &=
    PipeEq,       // |=
    CaretEq,      // ^=
    Slash,        // /
    SlashEq,      // /=
}
