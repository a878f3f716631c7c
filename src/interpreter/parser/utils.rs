use crate::{
    ast::Expr,
    error::{
        Diagnostic,
        parse_error::{Lookup, too_deep, unexpected_end, unexpected_token},
    },
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_DEPTH, MAX_NESTING, ParseResult, Parser},
    },
};

impl<'a> Parser<'a> {
    /// Returns `true` once every token has been consumed.
    pub(crate) const fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Returns `true` if the current token has the given kind.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.tokens.get(self.current).is_some_and(|token| token.kind == kind)
    }

    /// Consumes the current token if it has any of the given kinds.
    pub(crate) fn match_any(&mut self, kinds: &[TokenKind]) -> Option<&'a Token> {
        let tokens = self.tokens;
        let token = tokens.get(self.current)?;
        if kinds.contains(&token.kind) {
            self.current += 1;
            Some(token)
        } else {
            None
        }
    }

    /// The token under the cursor.
    ///
    /// Past the end of the input this is an error pointing after the last
    /// token.
    pub(crate) fn current(&self) -> ParseResult<&'a Token> {
        let tokens = self.tokens;
        tokens.get(self.current).ok_or_else(|| self.boundary_error())
    }

    /// The token just before the cursor.
    ///
    /// Before the first token this is an error pointing at the first token.
    pub(crate) fn previous(&self) -> ParseResult<&'a Token> {
        let tokens = self.tokens;
        self.current
            .checked_sub(1)
            .and_then(|index| tokens.get(index))
            .ok_or_else(|| self.boundary_error())
    }

    /// Consumes and returns the current token.
    pub(crate) fn advance(&mut self) -> ParseResult<&'a Token> {
        let token = self.current()?;
        self.current += 1;
        Ok(token)
    }

    /// Records one more level of nesting, opened by `token`.
    pub(crate) fn enter(&mut self, token: &Token) -> ParseResult<()> {
        self.nesting += 1;
        if self.nesting > MAX_NESTING {
            log::debug!("nesting limit reached at offset {}", token.offset);
            return Err(too_deep(token, MAX_NESTING));
        }
        Ok(())
    }

    /// Closes the innermost level of nesting.
    pub(crate) const fn leave(&mut self) {
        self.nesting -= 1;
    }

    /// Rejects `expr` if it is deeper than [`MAX_DEPTH`]. `token` is the
    /// operator that built it.
    pub(crate) fn check_depth(expr: Expr, token: &Token) -> ParseResult<Expr> {
        if expr.depth() > MAX_DEPTH {
            return Err(too_deep(token, MAX_DEPTH));
        }
        Ok(expr)
    }

    /// Builds the diagnostic for a cursor that has run off either end of the
    /// token slice.
    pub(crate) fn boundary_error(&self) -> Diagnostic {
        match (self.tokens.get(self.current), self.tokens.last()) {
            (Some(token), _) => unexpected_token(token, Lookup::Forward),
            (None, Some(last)) => unexpected_token(last, Lookup::Backward),
            (None, None) => unexpected_end(self.source.len()),
        }
    }
}

/// Locates the `(` left unmatched at the end of `source`.
///
/// Scans backward from the end of the text, counting `)` as one more level to
/// close and `(` as one level closed, and stops at the `(` that brings the
/// count to zero. If the count never reaches zero the scan stops at offset
/// `0`.
///
/// # Example
/// ```
/// use expressions::interpreter::parser::utils::find_unclosed_paren;
///
/// assert_eq!(find_unclosed_paren("(true && false"), 0);
/// assert_eq!(find_unclosed_paren("(1) or (2 > (1)"), 7);
/// ```
#[must_use]
pub fn find_unclosed_paren(source: &str) -> usize {
    let bytes = source.as_bytes();
    let mut index = bytes.len();
    let mut open = 1usize;

    while open > 0 && index > 0 {
        index -= 1;
        match bytes[index] {
            b'(' => open -= 1,
            b')' => open += 1,
            _ => {},
        }
    }

    index
}
