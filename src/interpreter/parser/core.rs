use crate::{
    ast::Expr,
    error::{
        Diagnostic,
        parse_error::{Lookup, unexpected_token},
    },
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, Diagnostic>;

/// Deepest nesting of parentheses and prefix operators the parser accepts.
///
/// Every level costs one pass through the whole precedence ladder on the
/// call stack.
pub const MAX_NESTING: usize = 64;

/// Deepest expression tree the parser builds, counted in nodes from the root
/// to the furthest leaf.
pub const MAX_DEPTH: usize = 512;

/// A recursive-descent parser over a lexed token slice.
///
/// The parser keeps the original source text next to the tokens so that
/// diagnostics which are not tied to a single token (an unclosed `(`) can be
/// located in it.
///
/// Nesting is bounded by [`MAX_NESTING`] and tree depth by [`MAX_DEPTH`], so
/// neither parsing nor evaluating the result can exhaust the stack.
pub struct Parser<'a> {
    pub(crate) source:  &'a str,
    pub(crate) tokens:  &'a [Token],
    pub(crate) current: usize,
    pub(crate) nesting: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the first token.
    ///
    /// # Parameters
    /// - `source`: The text `tokens` were lexed from.
    /// - `tokens`: The output of [`crate::interpreter::lexer::lex`].
    #[must_use]
    pub const fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Self { source,
               tokens,
               current: 0,
               nesting: 0 }
    }

    /// Parses the whole token slice into one expression.
    ///
    /// Zero tokens produce the empty expression. Tokens left over after a
    /// complete expression are an error.
    ///
    /// # Errors
    /// Returns an `expressions-unexpected-token` or
    /// `expressions-unclosed-paren` diagnostic, or `expressions-too-deep` once
    /// a nesting limit is crossed.
    pub fn parse(mut self) -> ParseResult<Expr> {
        if self.tokens.is_empty() {
            return Ok(Expr::empty());
        }

        let expr = self.parse_expression()?;

        if let Some(token) = self.tokens.get(self.current) {
            return Err(unexpected_token(token, Lookup::Forward));
        }

        Ok(expr)
    }

    /// Parses a full expression, starting at the loosest binding level.
    ///
    /// Grammar: `expression := equality`
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_equality()
    }
}

/// Parses `tokens`, lexed from `source`, into an expression tree.
///
/// # Errors
/// See [`Parser::parse`].
///
/// # Example
/// ```
/// use expressions::{
///     ast::{BinaryOperator, ExprKind, Span},
///     interpreter::{lexer::lex, parser::core::parse},
/// };
///
/// let source = "1 < 2 and true";
/// let tokens = lex(source).unwrap();
/// let expr = parse(source, &tokens).unwrap();
///
/// assert_eq!(expr.span, Span::new(0, 14));
/// assert!(matches!(expr.kind, ExprKind::Binary { op: BinaryOperator::And, .. }));
/// ```
pub fn parse(source: &str, tokens: &[Token]) -> ParseResult<Expr> {
    let expr = Parser::new(source, tokens).parse()?;
    log::debug!("parsed expression spanning {}", expr.span);
    Ok(expr)
}
