use logos::Logos;

use crate::{
    ast::Span,
    error::{Diagnostic, parse_error::unidentified_token},
};

/// The kind of a lexical token.
///
/// Multi-character spellings always win over their single-character
/// prefixes (`===` over `==`, `!==` over `!=` and `!`, `>=` over `>`), so the
/// order in which operators are tried does not matter. Keywords are
/// case-sensitive and are matched without a word boundary, so `trueand` is
/// `true` followed by `and`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\x0B\x00]+")]
pub enum TokenKind {
    /// A double-quoted string, e.g. `"a \" b"`. Escapes are kept verbatim.
    #[regex(r#""([^"\\]|\\.)*""#)]
    StringLit,
    /// A decimal number, e.g. `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// `false`
    #[token("false")]
    False,
    /// `true`
    #[token("true")]
    True,
    /// `&&`, `/\` or `and`
    #[token("&&")]
    #[token(r"/\")]
    #[token("and")]
    Conjunction,
    /// `\/` or `or`
    #[token(r"\/")]
    #[token("or")]
    Disjunction,
    /// `===`, `<->` or `<=>`
    #[token("===")]
    #[token("<->")]
    #[token("<=>")]
    Equality,
    /// `!==`, `!<->`, `!<=>` or `<>`
    #[token("!==")]
    #[token("!<->")]
    #[token("!<=>")]
    #[token("<>")]
    NotEquality,
    /// `==`
    #[token("==")]
    Equals,
    /// `!=`
    #[token("!=")]
    NotEquals,
    /// `=>` or `->`
    #[token("=>")]
    #[token("->")]
    Implication,
    /// `xor`
    #[token("xor")]
    Xor,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `~` or `!`
    #[token("~")]
    #[token("!")]
    Not,
    /// `-`
    #[token("-")]
    Minus,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
}

impl TokenKind {
    /// Returns `true` for tokens that can start a value on their own:
    /// literals and `(`.
    #[must_use]
    pub const fn is_value_like(self) -> bool {
        matches!(self,
                 Self::StringLit | Self::Number | Self::False | Self::True | Self::LeftParen)
    }
}

/// A lexical match: the matched text, its kind and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub kind:   TokenKind,
    /// Byte offset of the first character of the match, after any skipped
    /// whitespace.
    pub offset: usize,
}

impl Token {
    #[must_use]
    pub fn new(lexeme: impl Into<String>, kind: TokenKind, offset: usize) -> Self {
        Self { lexeme: lexeme.into(),
               kind,
               offset }
    }

    /// The source range covered by the lexeme.
    #[must_use]
    pub fn span(&self) -> Span {
        Span::new(self.offset, self.offset + self.lexeme.len())
    }
}

/// Splits an expression into tokens.
///
/// Whitespace between tokens is skipped. An empty or all-whitespace input
/// yields no tokens.
///
/// # Errors
/// Returns an `expressions-unidentified-token` diagnostic highlighting the
/// first character no rule matches.
///
/// # Example
/// ```
/// use expressions::interpreter::lexer::{TokenKind, lex};
///
/// let tokens = lex("true && 1 >= 0").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::True,
///             TokenKind::Conjunction,
///             TokenKind::Number,
///             TokenKind::GreaterEqual,
///             TokenKind::Number]);
/// assert_eq!(tokens[2].offset, 8);
/// ```
pub fn lex(source: &str) -> Result<Vec<Token>, Diagnostic> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => {
                log::trace!("token {kind:?} {:?} at {}", lexer.slice(), span.start);
                tokens.push(Token::new(lexer.slice(), kind, span.start));
            },
            Err(()) => return Err(unidentified_token(source, span.start)),
        }
    }

    log::debug!("lexed {} tokens", tokens.len());
    Ok(tokens)
}
