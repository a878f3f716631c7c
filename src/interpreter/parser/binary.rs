use crate::{
    ast::{BinaryOperator, Expr, ExprKind, Span},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

/// Maps a token kind to the binary operator it spells.
///
/// Returns `None` for every kind that is not an infix operator, including
/// `-`, which is only ever a prefix.
///
/// # Example
/// ```
/// use expressions::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Conjunction),
///            Some(BinaryOperator::And));
/// assert_eq!(token_to_binary_operator(TokenKind::Minus), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Conjunction => Some(BinaryOperator::And),
        TokenKind::Disjunction => Some(BinaryOperator::Or),
        TokenKind::Xor => Some(BinaryOperator::Xor),
        TokenKind::Implication => Some(BinaryOperator::Implies),
        TokenKind::Equality => Some(BinaryOperator::StrictEqual),
        TokenKind::NotEquality => Some(BinaryOperator::StrictNotEqual),
        TokenKind::Equals => Some(BinaryOperator::Equal),
        TokenKind::NotEquals => Some(BinaryOperator::NotEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        _ => None,
    }
}

/// Wraps two operands in a binary node spanning from the start of `left` to
/// the end of `right`.
fn fold(operator: &Token, op: BinaryOperator, left: Expr, right: Expr) -> Expr {
    let span = Span::new(left.span.start, right.span.end);
    Expr::new(ExprKind::Binary { op,
                                 symbol: operator.lexeme.clone(),
                                 left: Box::new(left),
                                 right: Box::new(right) },
              span)
}

impl Parser<'_> {
    /// Parses one left-associative precedence level.
    ///
    /// Parses an operand with `operand`, then keeps folding
    /// `operator operand` pairs into the accumulated left-hand side for as
    /// long as the current token is one of `operators`.
    fn parse_left_associative(&mut self,
                              operators: &[TokenKind],
                              operand: fn(&mut Self) -> ParseResult<Expr>)
                              -> ParseResult<Expr> {
        let mut left = operand(self)?;

        while let Some(token) = self.match_any(operators) {
            let Some(op) = token_to_binary_operator(token.kind) else {
                unreachable!("{:?} is not a binary operator", token.kind);
            };
            let right = operand(self)?;
            left = Self::check_depth(fold(token, op, left, right), token)?;
        }

        Ok(left)
    }

    /// Parses equality operators, the loosest binding level.
    ///
    /// Grammar: `equality := implication (("!=" | "!==" | "==" | "===")
    /// implication)*`
    pub(crate) fn parse_equality(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(&[TokenKind::NotEquals,
                                      TokenKind::NotEquality,
                                      TokenKind::Equals,
                                      TokenKind::Equality],
                                    Self::parse_implication)
    }

    /// Grammar: `implication := disjunction (("=>" | "->") disjunction)*`
    pub(crate) fn parse_implication(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(&[TokenKind::Implication], Self::parse_disjunction)
    }

    /// Grammar: `disjunction := conjunction (("\/" | "or") conjunction)*`
    pub(crate) fn parse_disjunction(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(&[TokenKind::Disjunction], Self::parse_conjunction)
    }

    /// Grammar: `conjunction := xor (("&&" | "/\" | "and") xor)*`
    pub(crate) fn parse_conjunction(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(&[TokenKind::Conjunction], Self::parse_xor)
    }

    /// Grammar: `xor := comparison ("xor" comparison)*`
    pub(crate) fn parse_xor(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(&[TokenKind::Xor], Self::parse_comparison)
    }

    /// Parses relational operators, the tightest binary level.
    ///
    /// Grammar: `comparison := unary ((">" | "<" | ">=" | "<=") unary)*`
    pub(crate) fn parse_comparison(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(&[TokenKind::Greater,
                                      TokenKind::Less,
                                      TokenKind::GreaterEqual,
                                      TokenKind::LessEqual],
                                    Self::parse_unary)
    }
}
