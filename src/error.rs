/// The diagnostic shape shared by every stage.
///
/// Defines [`Diagnostic`], its message/submessage/hint triple and the
/// parameters that may nest further messages.
pub mod diagnostic;
/// Lexing and parsing diagnostics.
///
/// Constructors for unidentified tokens, unexpected tokens and unclosed
/// parentheses, along with their message keys.
pub mod parse_error;
/// Evaluation diagnostics.
///
/// Constructors for operand type mismatches and missing operand values.
pub mod runtime_error;

pub use diagnostic::{Diagnostic, DiagnosticKind, Message, Param};
