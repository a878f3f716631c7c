use std::fmt;

/// A `[start, end)` byte range into the original expression text.
///
/// Spans are only ever used to point diagnostics at the offending part of
/// the input; evaluation never looks at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Offset of the first byte covered.
    pub start: usize,
    /// Offset one past the last byte covered.
    pub end:   usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns a span covering both `self` and `other`.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self { start: self.start.min(other.start),
               end:   self.end.max(other.end), }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Represents a literal value in the language.
///
/// `LiteralValue` covers every constant that can appear directly in source
/// code and doubles as the result type of evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// `true` or `false`.
    Boolean(bool),
    /// A double precision number such as `42` or `3.14`.
    Number(f64),
    /// The contents of a double-quoted string, escapes kept verbatim.
    String(String),
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `!` or `~`, boolean negation.
    Not,
    /// `-`, numeric negation.
    Negate,
}

/// Infix operators, all left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `&&`, `/\`, `and`
    And,
    /// `\/`, `or`
    Or,
    /// `xor`
    Xor,
    /// `=>`, `->`
    Implies,
    /// `===`, `<->`, `<=>`
    StrictEqual,
    /// `!==`, `!<->`, `!<=>`, `<>`
    StrictNotEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
}

/// An abstract syntax tree node.
///
/// The `span` always covers the full textual range of the subtree. For a
/// parenthesized sub-expression it covers the parentheses as well.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    depth:    usize,
}

/// The shape of an [`Expr`].
///
/// Operand counts are fixed by the variant: unary operators own exactly one
/// operand, binary operators exactly two, leaves none.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// The expression made of zero tokens. Evaluates to no value at all.
    Empty,
    /// A literal leaf.
    Literal(LiteralValue),
    /// A prefix operation such as `!x` or `-x`.
    Unary {
        op:      UnaryOperator,
        /// The operator as spelled in the source, e.g. `~`.
        symbol:  String,
        operand: Box<Expr>,
    },
    /// An infix operation such as `a && b`.
    Binary {
        op:     BinaryOperator,
        /// The operator as spelled in the source, e.g. `and`.
        symbol: String,
        left:   Box<Expr>,
        right:  Box<Expr>,
    },
}

impl Expr {
    #[must_use]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        let depth = 1 + match &kind {
            ExprKind::Empty | ExprKind::Literal(_) => 0,
            ExprKind::Unary { operand, .. } => operand.depth,
            ExprKind::Binary { left, right, .. } => left.depth.max(right.depth),
        };
        Self { kind,
               span,
               depth }
    }

    /// Creates the node returned for an input without any tokens.
    #[must_use]
    pub const fn empty() -> Self {
        Self { kind:  ExprKind::Empty,
               span:  Span::new(0, 0),
               depth: 1, }
    }

    /// Number of nodes on the longest path from this node down to a leaf.
    ///
    /// Evaluating a tree recurses this deep.
    ///
    /// # Example
    /// ```
    /// use expressions::parse_expression;
    ///
    /// assert_eq!(parse_expression("1").unwrap().depth(), 1);
    /// assert_eq!(parse_expression("!(1 > 2) and true").unwrap().depth(), 4);
    /// ```
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns `true` if this is the empty expression.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, ExprKind::Empty)
    }

    /// Calls `visit` on this node and all of its descendants, parents first.
    pub fn walk<F: FnMut(&Self)>(&self, visit: &mut F) {
        visit(self);
        match &self.kind {
            ExprKind::Empty | ExprKind::Literal(_) => {},
            ExprKind::Unary { operand, .. } => operand.walk(visit),
            ExprKind::Binary { left, right, .. } => {
                left.walk(visit);
                right.walk(visit);
            },
        }
    }
}
