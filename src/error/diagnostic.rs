use std::fmt;

use crate::ast::Span;

/// The pipeline stage a [`Diagnostic`] was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The lexer found text no rule recognises.
    Lex,
    /// The token stream does not form an expression.
    Parse,
    /// An operator received an operand of the wrong type.
    Type,
    /// An operator received the empty expression as an operand.
    MissingValue,
    /// The expression is longer or more deeply nested than allowed.
    Limit,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex => write!(f, "lex error"),
            Self::Parse => write!(f, "parse error"),
            Self::Type => write!(f, "type error"),
            Self::MissingValue => write!(f, "missing value"),
            Self::Limit => write!(f, "limit exceeded"),
        }
    }
}

/// A parameter substituted into a [`Message`] by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// Plain text inserted as-is.
    Text(String),
    /// A smaller message rendered on its own and then inserted.
    Message(Message),
}

impl From<&str> for Param {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Param {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Message> for Param {
    fn from(message: Message) -> Self {
        Self::Message(message)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Message(message) => write!(f, "{message}"),
        }
    }
}

/// A message key together with its ordered parameters.
///
/// Keys are stable identifiers such as `expressions-unexpected-token`; turning
/// them into prose is left to whoever displays the diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub key:    &'static str,
    pub params: Vec<Param>,
}

impl Message {
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self { key,
               params: Vec::new() }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_param(mut self, param: impl Into<Param>) -> Self {
        self.params.push(param.into());
        self
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)?;
        if self.params.is_empty() {
            return Ok(());
        }
        write!(f, "(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ")")
    }
}

/// A structured failure from any stage of the pipeline.
///
/// A diagnostic is built once, at the point of failure, and handed back to
/// the caller untouched. Its `span` is always a valid range of the original
/// expression text, suitable for [`crate::render_excerpt`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind} at {span}: {message}")]
pub struct Diagnostic {
    pub kind:       DiagnosticKind,
    pub message:    Message,
    pub submessage: Option<Message>,
    pub hint:       Option<Message>,
    pub span:       Span,
}

impl Diagnostic {
    #[must_use]
    pub const fn new(kind: DiagnosticKind, message: Message, span: Span) -> Self {
        Self { kind,
               message,
               submessage: None,
               hint: None,
               span }
    }

    #[must_use]
    pub fn with_submessage(mut self, submessage: Message) -> Self {
        self.submessage = Some(submessage);
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: Message) -> Self {
        self.hint = Some(hint);
        self
    }

    /// The message key of the main message.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.message.key
    }

    /// The hint key, if any.
    #[must_use]
    pub fn hint_key(&self) -> Option<&'static str> {
        self.hint.as_ref().map(|hint| hint.key)
    }
}
