//! Burnish Formatter
//!
//! Deterministic pretty printer for JavaScript source.
//!
//! # Architecture
//!
//! Formatting is a single forward pass over the token stream:
//!
//! 1. **Lex**: [`burnish_lexer`] turns the source into a gap-free token list
//! 2. **Dispatch**: each token runs one rule, appending typed fragments to
//!    an output buffer while a context stack tracks what is open (block,
//!    condition, argument list, ternary, ...)
//! 3. **Render**: the fragment texts are concatenated
//!
//! Rules only look backwards. Once a statement is finished its fragments
//! never change, so output is identical for identical input and running
//! the formatter on its own output is a fixed point.
//!
//! The same option set drives every rule; see [`Options`] for the knobs.

mod buffer;
mod context;
mod error;
mod fragment;
mod options;
mod rules;

pub use burnish_lexer::{LexError, Token};
pub use error::FormatError;
pub use options::{BomMode, Options, PropertyQuoting, QuoteStyle, SuppressSpaceAfter};

use buffer::OutputBuffer;
use fragment::FragmentKind;

/// Format JavaScript source.
///
/// # Example
///
/// ```
/// use burnish_fmt::{format, Options};
///
/// let pretty = format("if(x){y()}", &Options::default()).unwrap();
/// assert_eq!(pretty, "if (x) {\n    y()\n}");
/// ```
///
/// # Errors
///
/// Fails when the source does not lex, or when a byte order mark appears
/// anywhere but the very start.
pub fn format(source: &str, options: &Options) -> Result<String, FormatError> {
    let tokens = burnish_lexer::lex(source)?;
    format_tokens(&tokens, options)
}

/// Format an already-lexed token list.
///
/// # Errors
///
/// Fails when a byte order mark token appears anywhere but index zero.
pub fn format_tokens(tokens: &[Token], options: &Options) -> Result<String, FormatError> {
    let options = options.resolved();
    let mut buffer = OutputBuffer::new(&options);

    if options.bom == BomMode::Add {
        buffer.push_fragment(FragmentKind::Bom, "\u{FEFF}");
    }

    // Widened in place whenever a closer pops past the last open context,
    // so the first line indents with the rest.
    buffer.push_fragment(FragmentKind::Indent, "");

    for (index, token) in tokens.iter().enumerate() {
        rules::dispatch(&mut buffer, tokens, index, token)?;
    }

    buffer.remove_whitespace();

    if options.trailing_newline {
        buffer.add_newline();
    }

    Ok(buffer.render())
}
