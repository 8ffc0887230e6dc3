//! Output accumulation and the indentation context stack.
//!
//! [`OutputBuffer`] is what every formatting rule writes into. It owns two
//! growing structures: the fragment list (the output so far, typed) and the
//! context stack (one frame per open construct, each contributing a slice
//! of indentation). Rules freely strip trailing whitespace, inspect the
//! last meaningful fragment and rewrite it, so layout decisions can be
//! revised right up until the next content fragment lands.

use crate::context::{Context, ContextKind};
use crate::fragment::{Fragment, FragmentKind};
use crate::options::Options;

pub(crate) struct OutputBuffer<'a> {
    fragments: Vec<Fragment>,
    contexts: Vec<Context>,
    options: &'a Options,
}

impl<'a> OutputBuffer<'a> {
    pub(crate) fn new(options: &'a Options) -> Self {
        Self {
            fragments: Vec::new(),
            contexts: Vec::new(),
            options,
        }
    }

    pub(crate) fn options(&self) -> &Options {
        self.options
    }

    pub(crate) fn push_fragment(&mut self, kind: FragmentKind, text: impl Into<String>) {
        self.fragments.push(Fragment {
            kind,
            text: text.into(),
        });
    }

    pub(crate) fn add_space(&mut self) {
        self.push_fragment(FragmentKind::Space, " ");
    }

    /// Break the line: trailing spaces and indentation go away, then the
    /// configured newline and fresh indentation for the next line land.
    pub(crate) fn add_newline(&mut self) {
        while matches!(
            self.last_kind(),
            Some(FragmentKind::Indent | FragmentKind::Space)
        ) {
            self.fragments.pop();
        }

        self.push_fragment(FragmentKind::Newline, self.options.newline.clone());
        let indentation = self.indentation();
        self.push_fragment(FragmentKind::Indent, indentation);
    }

    /// Leave a blank line when the previous statement just ended, so a new
    /// statement group stands apart from `;` or `}` before it.
    pub(crate) fn add_conditional_newline(&mut self) {
        let after_statement = matches!(
            self.previous_meaningful().map(|f| f.text.as_str()),
            Some(";" | "}")
        );

        if after_statement {
            self.remove_whitespace();
            self.add_newline();
            self.add_newline();
        }
    }

    /// Drop trailing spaces, indentation and newlines.
    pub(crate) fn remove_whitespace(&mut self) {
        while matches!(self.last_kind(), Some(kind) if kind.is_whitespace()) {
            self.fragments.pop();
        }
    }

    /// The last fragment that is not whitespace.
    pub(crate) fn previous_meaningful(&self) -> Option<&Fragment> {
        self.fragments.iter().rev().find(|f| !f.kind.is_whitespace())
    }

    pub(crate) fn last(&self) -> Option<&Fragment> {
        self.fragments.last()
    }

    pub(crate) fn last_kind(&self) -> Option<FragmentKind> {
        self.fragments.last().map(|f| f.kind)
    }

    pub(crate) fn last_text(&self) -> Option<&str> {
        self.fragments.last().map(|f| f.text.as_str())
    }

    /// Swap the most recent fragment for another, keeping its position.
    pub(crate) fn replace_last(&mut self, kind: FragmentKind, text: String) {
        if let Some(last) = self.fragments.last_mut() {
            *last = Fragment { kind, text };
        }
    }

    /// True when nothing but spaces and indentation follow the last
    /// newline. An empty buffer counts as a line start.
    pub(crate) fn at_line_start(&self) -> bool {
        for fragment in self.fragments.iter().rev() {
            match fragment.kind {
                FragmentKind::Space | FragmentKind::Indent => {}
                FragmentKind::Newline => return true,
                _ => return false,
            }
        }

        true
    }

    /// Concatenated indentation of every open context frame.
    pub(crate) fn indentation(&self) -> String {
        self.contexts.iter().map(|c| c.indent.as_str()).collect()
    }

    pub(crate) fn context(&self) -> Option<ContextKind> {
        self.contexts.last().map(|c| c.kind)
    }

    /// Open a frame that indents its contents one level.
    pub(crate) fn push_context(&mut self, kind: ContextKind) {
        let indent = self.options.indent.clone();
        self.contexts.push(Context { kind, indent });
    }

    /// Open a frame that tracks structure without indenting.
    pub(crate) fn push_flat_context(&mut self, kind: ContextKind) {
        self.contexts.push(Context {
            kind,
            indent: String::new(),
        });
    }

    /// Close the top frame. When the stack is already empty the closer had
    /// no opener: every indentation fragment written so far, the leading
    /// placeholder included, widens by one level instead.
    pub(crate) fn pop_context(&mut self) -> Option<Context> {
        if let Some(frame) = self.contexts.pop() {
            return Some(frame);
        }

        let indent = self.options.indent.clone();

        for fragment in &mut self.fragments {
            if fragment.kind == FragmentKind::Indent {
                fragment.text.insert_str(0, &indent);
            }
        }

        None
    }

    /// Put a previously popped frame back, indentation intact.
    pub(crate) fn restore_context(&mut self, frame: Context) {
        self.contexts.push(frame);
    }

    /// Close every frame that ends with the current statement.
    pub(crate) fn pop_statement_contexts(&mut self) {
        while matches!(self.context(), Some(kind) if kind.ends_with_statement()) {
            self.contexts.pop();
        }
    }

    /// Whether a `[` here opens an array literal rather than a subscript.
    /// Subscripts follow values: identifiers, `this`, `super`, call results
    /// and other subscripts.
    pub(crate) fn is_array_literal(&self) -> bool {
        match self.previous_meaningful() {
            None => true,
            Some(prev) => match prev.kind {
                FragmentKind::Keyword => !matches!(prev.text.as_str(), "this" | "super"),
                FragmentKind::IdentifierName => false,
                _ => !matches!(prev.text.as_str(), ")" | "]"),
            },
        }
    }

    /// Whether a `+` or `-` here is a sign rather than arithmetic. After a
    /// value-ending fragment it is arithmetic; after keywords and opening
    /// punctuation it is a sign.
    pub(crate) fn in_unary_position(&self) -> bool {
        if self.fragments.is_empty() {
            return true;
        }

        match self.previous_meaningful() {
            None => true,
            Some(prev) => match prev.kind {
                FragmentKind::Keyword => true,
                FragmentKind::Punctuator => !matches!(prev.text.as_str(), ")" | "}" | "]"),
                _ => false,
            },
        }
    }

    /// Whether a comment on its own line deserves blank lines before it.
    /// Not at the start of output, not right after an opening symbol, and
    /// not when stacking onto another line comment.
    pub(crate) fn blank_line_before_comment(&self) -> bool {
        match self.previous_meaningful() {
            None => false,
            Some(prev) => {
                !matches!(prev.text.as_str(), "{" | "(" | "[")
                    && !matches!(prev.kind, FragmentKind::LineComment | FragmentKind::Bom)
            }
        }
    }

    /// Concatenate every fragment into the final output.
    pub(crate) fn render(self) -> String {
        let capacity = self.fragments.iter().map(|f| f.text.len()).sum();
        let mut out = String::with_capacity(capacity);

        for fragment in &self.fragments {
            out.push_str(&fragment.text);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(options: &Options) -> OutputBuffer<'_> {
        OutputBuffer::new(options)
    }

    #[test]
    fn newline_strips_trailing_spaces_and_indents() {
        let options = Options::default();
        let mut buffer = buffer(&options);

        buffer.push_fragment(FragmentKind::IdentifierName, "x");
        buffer.add_space();
        buffer.add_newline();

        assert_eq!(buffer.render(), "x\n");
    }

    #[test]
    fn newline_carries_context_indentation() {
        let options = Options::default();
        let mut buffer = buffer(&options);

        buffer.push_context(ContextKind::Brace);
        buffer.push_fragment(FragmentKind::Punctuator, "{");
        buffer.add_newline();
        buffer.push_fragment(FragmentKind::IdentifierName, "x");

        assert_eq!(buffer.render(), "{\n    x");
    }

    #[test]
    fn conditional_newline_fires_only_after_statement_ends() {
        let options = Options::default();
        let mut buffer = buffer(&options);

        buffer.push_fragment(FragmentKind::Semicolon, ";");
        buffer.add_newline();
        buffer.add_conditional_newline();

        assert_eq!(buffer.render(), ";\n\n");

        let mut buffer = OutputBuffer::new(&options);
        buffer.push_fragment(FragmentKind::IdentifierName, "x");
        buffer.add_conditional_newline();

        assert_eq!(buffer.render(), "x");
    }

    #[test]
    fn previous_meaningful_skips_whitespace() {
        let options = Options::default();
        let mut buffer = buffer(&options);

        buffer.push_fragment(FragmentKind::IdentifierName, "x");
        buffer.add_space();
        buffer.add_newline();

        assert_eq!(buffer.previous_meaningful().map(|f| f.text.as_str()), Some("x"));
    }

    #[test]
    fn popping_without_a_frame_widens_existing_indents() {
        let options = Options::default();
        let mut buffer = buffer(&options);

        buffer.push_fragment(FragmentKind::Indent, "");
        buffer.push_fragment(FragmentKind::IdentifierName, "x");
        buffer.add_newline();

        assert!(buffer.pop_context().is_none());

        // Both the placeholder and the newline's indent grew one level.
        assert_eq!(buffer.render(), "    x\n    ");
    }

    #[test]
    fn statement_contexts_pop_together() {
        let options = Options::default();
        let mut buffer = buffer(&options);

        buffer.push_flat_context(ContextKind::FunctionArgs);
        buffer.push_context(ContextKind::Var);
        buffer.push_flat_context(ContextKind::Ternary);
        buffer.pop_statement_contexts();

        assert_eq!(buffer.context(), Some(ContextKind::FunctionArgs));
    }

    #[test]
    fn array_literal_detection_follows_the_previous_fragment() {
        let options = Options::default();
        let mut buffer = buffer(&options);
        assert!(buffer.is_array_literal());

        buffer.push_fragment(FragmentKind::IdentifierName, "x");
        assert!(!buffer.is_array_literal());

        buffer.push_fragment(FragmentKind::Punctuator, ")");
        assert!(!buffer.is_array_literal());

        buffer.push_fragment(FragmentKind::Keyword, "return");
        assert!(buffer.is_array_literal());

        buffer.push_fragment(FragmentKind::Keyword, "this");
        assert!(!buffer.is_array_literal());
    }

    #[test]
    fn unary_position_follows_operators_but_not_values() {
        let options = Options::default();
        let mut buffer = buffer(&options);
        assert!(buffer.in_unary_position());

        buffer.push_fragment(FragmentKind::Punctuator, "=");
        assert!(buffer.in_unary_position());

        buffer.push_fragment(FragmentKind::NumericLiteral, "1");
        assert!(!buffer.in_unary_position());

        buffer.push_fragment(FragmentKind::Punctuator, ")");
        assert!(!buffer.in_unary_position());
    }
}
