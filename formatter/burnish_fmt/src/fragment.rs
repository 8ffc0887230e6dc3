//! Typed chunks of formatted output.
//!
//! The formatter never concatenates strings while deciding layout. It builds
//! a list of [`Fragment`]s instead, so later rules can inspect, strip or
//! replace earlier output by kind. Rendering is a single concatenation at
//! the very end.

/// One piece of the output under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fragment {
    pub(crate) kind: FragmentKind,
    pub(crate) text: String,
}

/// What a fragment holds.
///
/// Whitespace kinds are transparent to lookbacks and can be stripped by
/// [`crate::buffer::OutputBuffer::remove_whitespace`]. Everything else is
/// content and stays put once written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FragmentKind {
    /// Configured line break sequence.
    Newline,
    /// A single space.
    Space,
    /// Indentation for the line that follows a newline.
    Indent,
    /// Statement terminator, always written as `;` even when the source
    /// relied on automatic insertion.
    Semicolon,
    /// Spacing between code and a trailing comment on the same line.
    CommentGutter,
    Keyword,
    IdentifierName,
    Punctuator,
    StringLiteral,
    NumericLiteral,
    BooleanLiteral,
    NullLiteral,
    RegularExpressionLiteral,
    Bom,
    Shebang,
    /// A `//` comment on its own line.
    LineComment,
    /// A `//` comment kept at the end of a code line.
    StatementComment,
    BlockComment,
}

impl FragmentKind {
    pub(crate) fn is_whitespace(self) -> bool {
        matches!(self, Self::Newline | Self::Space | Self::Indent)
    }
}
