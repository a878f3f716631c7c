use crate::{
    ast::{Expr, ExprKind, LiteralValue, Span, UnaryOperator},
    error::parse_error::{Lookup, unclosed_paren, unexpected_token},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, Parser},
            utils::find_unclosed_paren,
        },
    },
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Prefix operators are right-associative, so `!-x` is `!(-x)`. The node
    /// spans from the operator to the end of its operand.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("~" | "!" | "-") unary
    ///            | primary
    /// ```
    pub(crate) fn parse_unary(&mut self) -> ParseResult<Expr> {
        if let Some(token) = self.match_any(&[TokenKind::Not, TokenKind::Minus]) {
            let op = match token.kind {
                TokenKind::Minus => UnaryOperator::Negate,
                _ => UnaryOperator::Not,
            };
            self.enter(token)?;
            let operand = self.parse_unary()?;
            self.leave();
            let span = Span::new(token.offset, operand.span.end);

            let expr = Expr::new(ExprKind::Unary { op,
                                                   symbol: token.lexeme.clone(),
                                                   operand: Box::new(operand) },
                                 span);
            return Self::check_depth(expr, token);
        }

        self.parse_primary()
    }

    /// Parses a primary expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := "false" | "true" | number | string
    ///              | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// Any other token, or the end of input, is an unexpected token.
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Expr> {
        let token = self.current()?;

        let value = match token.kind {
            TokenKind::False => false.into(),
            TokenKind::True => true.into(),
            TokenKind::Number => parse_number(token)?,
            TokenKind::StringLit => parse_string(token),
            TokenKind::LeftParen => return self.parse_grouping(),
            _ => return Err(unexpected_token(token, Lookup::Forward)),
        };

        self.current += 1;
        Ok(Expr::new(ExprKind::Literal(value), token.span()))
    }

    /// Parses a parenthesized expression.
    ///
    /// The inner node is returned as is, except that its span is widened to
    /// cover both parentheses.
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        let open = self.advance()?;
        self.enter(open)?;
        let mut expr = self.parse_expression()?;
        self.consume_right_paren()?;
        self.leave();
        let close = self.previous()?;

        expr.span = Span::new(open.offset, close.offset + close.lexeme.len());
        Ok(expr)
    }

    /// Consumes the `)` closing a grouping.
    ///
    /// # Errors
    /// If another token is found instead, that token is unexpected. If the
    /// input ends instead, the unmatched `(` is located in the source text.
    fn consume_right_paren(&mut self) -> ParseResult<()> {
        if self.check(TokenKind::RightParen) {
            self.advance()?;
            return Ok(());
        }

        if !self.is_at_end() {
            return Err(unexpected_token(self.current()?, Lookup::Forward));
        }

        Err(unclosed_paren(find_unclosed_paren(self.source)))
    }
}

fn parse_number(token: &Token) -> ParseResult<LiteralValue> {
    token.lexeme
         .parse()
         .map(LiteralValue::Number)
         .map_err(|_| unexpected_token(token, Lookup::Forward))
}

/// Strips the surrounding quotes. Escape sequences are kept verbatim.
fn parse_string(token: &Token) -> LiteralValue {
    let inner = token.lexeme
                     .strip_prefix('"')
                     .and_then(|s| s.strip_suffix('"'))
                     .unwrap_or(&token.lexeme);
    LiteralValue::String(inner.to_string())
}
