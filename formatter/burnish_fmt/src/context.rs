//! Indentation context stack entries.

/// One frame of the context stack.
///
/// Each frame carries the indentation it contributes. The indentation of a
/// line is the concatenation of every live frame's `indent`, so flat frames
/// (empty `indent`) track structure without shifting the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Context {
    pub(crate) kind: ContextKind,
    pub(crate) indent: String,
}

/// What construct a context frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContextKind {
    /// Object literal or free-standing block.
    Brace,
    /// Array literal.
    Bracket,
    /// Subscript access, as in `x[0]`.
    ArrayIndex,
    /// Grouping parenthesis.
    Paren,
    /// Call arguments or function parameters.
    FunctionArgs,
    /// Marks that a comma appeared inside `FunctionArgs`.
    FunctionArgsComma,
    If,
    IfCondition,
    IfBlock,
    Else,
    ElseBlock,
    For,
    ForCondition,
    ForBlock,
    Function,
    FunctionBlock,
    Switch,
    SwitchBlock,
    /// A `case` label group inside a switch.
    Case,
    /// A `default` label group inside a switch.
    Default,
    Catch,
    Finally,
    Var,
    Ternary,
    /// Continuation lines of a comma-joined expression statement.
    CommaOperator,
}

impl ContextKind {
    /// Frames that die with the statement that opened them.
    pub(crate) fn ends_with_statement(self) -> bool {
        matches!(
            self,
            Self::If | Self::Else | Self::For | Self::Ternary | Self::Var
        )
    }

    /// The block frame `{` opens when this frame is on top.
    pub(crate) fn block_kind(self) -> Option<Self> {
        match self {
            Self::For => Some(Self::ForBlock),
            Self::Function => Some(Self::FunctionBlock),
            Self::Switch => Some(Self::SwitchBlock),
            Self::If => Some(Self::IfBlock),
            Self::Else => Some(Self::ElseBlock),
            _ => None,
        }
    }

    /// Frames opened by a control-flow keyword and finished by the `}` of
    /// their block.
    pub(crate) fn opened_by_keyword(self) -> bool {
        matches!(
            self,
            Self::Catch
                | Self::Else
                | Self::For
                | Self::Finally
                | Self::Function
                | Self::If
                | Self::Switch
        )
    }
}
