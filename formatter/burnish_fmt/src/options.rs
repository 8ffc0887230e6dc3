//! Formatting options.

use bitflags::bitflags;

/// What to do with a leading U+FEFF byte order mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BomMode {
    /// Always start the output with one.
    Add,
    /// Never emit one.
    #[default]
    Remove,
    /// Emit one exactly when the input had one.
    Preserve,
}

/// Preferred quoting for string literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteStyle {
    #[default]
    Double,
    Single,
    /// Keep the input quoting.
    Preserve,
}

/// Whether object property names are quoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PropertyQuoting {
    /// Quote every property name.
    Add,
    /// Drop quotes whenever the name is a plain identifier.
    #[default]
    Remove,
    /// Keep the input form.
    Preserve,
}

bitflags! {
    /// Keywords that lose the space before their parenthesis, turning
    /// `if (x)` into `if(x)`.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct SuppressSpaceAfter: u8 {
        const IF = 1;
        const FOR = 1 << 1;
        const FUNCTION = 1 << 2;
        const SWITCH = 1 << 3;
    }
}

/// Everything the formatter can be told about the desired output.
///
/// The defaults produce four-space indentation, Unix newlines,
/// double-quoted strings and unquoted property names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub bom: BomMode,
    /// Spacing between code and a trailing `//` comment.
    pub comment_gutter: String,
    pub quote_style: QuoteStyle,
    /// Put `else`, `catch` and `finally` on their own line instead of
    /// sharing the line with the closing brace.
    pub else_newline: bool,
    /// Text of one indentation level.
    pub indent: String,
    /// Stricter, lint-friendly layout: `case` labels align with the
    /// switch, and dangling-underscore property names stay quoted.
    pub strict: bool,
    /// Line break sequence for emitted newlines.
    pub newline: String,
    pub suppress_space_after: SuppressSpaceAfter,
    /// Attach `++` and `--` to their operand.
    pub suppress_space_with_inc_dec: bool,
    /// Whether property name quoting is added, removed or preserved.
    pub property_quoting: PropertyQuoting,
    /// End the output with a newline.
    pub trailing_newline: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bom: BomMode::Remove,
            comment_gutter: "  ".to_string(),
            quote_style: QuoteStyle::Double,
            else_newline: false,
            indent: "    ".to_string(),
            strict: false,
            newline: "\n".to_string(),
            suppress_space_after: SuppressSpaceAfter::empty(),
            suppress_space_with_inc_dec: false,
            property_quoting: PropertyQuoting::Remove,
            trailing_newline: false,
        }
    }
}

impl Options {
    /// Apply the adjustments implied by other settings. Strict mode never
    /// adds property quotes.
    pub(crate) fn resolved(&self) -> Options {
        let mut resolved = self.clone();

        if resolved.strict {
            resolved.property_quoting = PropertyQuoting::Remove;
        }

        resolved
    }
}

/// Convert a quoted string literal to the preferred quote style.
///
/// The literal keeps its escapes verbatim except for quote characters:
/// escaped quotes of the other style become bare, and bare quotes of the
/// target style gain a backslash. A literal that already starts with the
/// target quote is returned untouched.
pub(crate) fn requote(text: &str, style: QuoteStyle) -> String {
    let target = match style {
        QuoteStyle::Preserve => return text.to_string(),
        QuoteStyle::Double => '"',
        QuoteStyle::Single => '\'',
    };

    if text.starts_with(target) || text.len() < 2 {
        return text.to_string();
    }

    let body = &text[1..text.len() - 1];
    let mut out = String::with_capacity(text.len() + 2);
    out.push(target);

    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(q @ ('"' | '\'')) => {
                    if q == target {
                        out.push('\\');
                    }
                    out.push(q);
                }
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            c if c == target => {
                out.push('\\');
                out.push(target);
            }
            c => out.push(c),
        }
    }

    out.push(target);
    out
}
