use crate::{
    ast::Span,
    error::diagnostic::{Diagnostic, DiagnosticKind, Message},
    interpreter::lexer::{Token, TokenKind},
    util::excerpt::floor_char_boundary,
};

pub const UNIDENTIFIED_TOKEN: &str = "expressions-unidentified-token";
pub const UNEXPECTED_TOKEN: &str = "expressions-unexpected-token";
pub const UNCLOSED_PAREN: &str = "expressions-unclosed-paren";
pub const TOO_LONG: &str = "expressions-too-long";
pub const TOO_DEEP: &str = "expressions-too-deep";

pub const HINT_EXPECTED_VALUE: &str = "expressions-hint-expected-value";
pub const HINT_EXPECTED_VALUE_BEFORE: &str = "expressions-hint-expected-value-before";
pub const HINT_EXPECTED_VALUE_AFTER: &str = "expressions-hint-expected-value-after";
pub const HINT_EXPECTED_OPERATOR: &str = "expressions-hint-expected-operator";

/// Which side of the offending token the parser was looking at when it gave
/// up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The offending token is the current one; something was missing before
    /// it.
    Forward,
    /// The input ran out; something was missing after the offending token.
    Backward,
}

/// Builds the diagnostic for text at `offset` that no lexical rule matches.
///
/// Highlights a single character.
#[must_use]
pub fn unidentified_token(source: &str, offset: usize) -> Diagnostic {
    let end = source[offset..].chars()
                              .next()
                              .map_or(offset, |c| offset + c.len_utf8());
    let character = &source[offset..end];

    Diagnostic::new(DiagnosticKind::Lex,
                    Message::new(UNIDENTIFIED_TOKEN).with_param(character),
                    Span::new(offset, end))
}

/// Builds the diagnostic for a token that cannot appear where it was found.
///
/// The hint depends on the token: a `)` means a value was expected; running
/// out of input after a token means a value was missing after it; otherwise
/// value tokens mean an operator was missing before them and operator tokens
/// mean a value was missing before them.
#[must_use]
pub fn unexpected_token(token: &Token, lookup: Lookup) -> Diagnostic {
    let hint = match (token.kind, lookup) {
        (TokenKind::RightParen, _) => HINT_EXPECTED_VALUE,
        (_, Lookup::Backward) => HINT_EXPECTED_VALUE_AFTER,
        (kind, Lookup::Forward) if kind.is_value_like() => HINT_EXPECTED_OPERATOR,
        (_, Lookup::Forward) => HINT_EXPECTED_VALUE_BEFORE,
    };

    Diagnostic::new(DiagnosticKind::Parse,
                    Message::new(UNEXPECTED_TOKEN).with_param(token.lexeme.as_str()),
                    token.span()).with_hint(Message::new(hint).with_param(token.lexeme.as_str()))
}

/// Builds the diagnostic for an expression that ends before it started,
/// anchored at `offset`, the end of the source.
#[must_use]
pub fn unexpected_end(offset: usize) -> Diagnostic {
    Diagnostic::new(DiagnosticKind::Parse,
                    Message::new(UNEXPECTED_TOKEN).with_param(""),
                    Span::new(offset, offset)).with_hint(Message::new(HINT_EXPECTED_VALUE))
}

/// Builds the diagnostic for the unmatched `(` at `offset`.
#[must_use]
pub fn unclosed_paren(offset: usize) -> Diagnostic {
    Diagnostic::new(DiagnosticKind::Parse,
                    Message::new(UNCLOSED_PAREN),
                    Span::new(offset, offset + 1))
}

/// Builds the diagnostic for a source longer than `max_length` bytes.
///
/// Highlights everything past the limit.
#[must_use]
pub fn too_long(source: &str, max_length: usize) -> Diagnostic {
    Diagnostic::new(DiagnosticKind::Limit,
                    Message::new(TOO_LONG).with_param(source.len().to_string())
                                          .with_param(max_length.to_string()),
                    Span::new(floor_char_boundary(source, max_length), source.len()))
}

/// Builds the diagnostic for a token that nests the expression deeper than
/// `limit` levels.
#[must_use]
pub fn too_deep(token: &Token, limit: usize) -> Diagnostic {
    Diagnostic::new(DiagnosticKind::Limit,
                    Message::new(TOO_DEEP).with_param(limit.to_string()),
                    token.span())
}
