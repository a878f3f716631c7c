//! # expressions
//!
//! A small expression language over booleans, numbers and strings: boolean
//! logic, implication, exclusive or, strict and loose equality, numeric
//! comparison and negation. Expressions are lexed, parsed into a tree and
//! evaluated; every failure is reported as a structured [`Diagnostic`] whose
//! span points into the original text.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use crate::{
    ast::{Expr, LiteralValue},
    error::parse_error::too_long,
    interpreter::{evaluator::core::Evaluator, lexer::lex, parser::core::parse},
};

/// Defines the structure of parsed expressions.
///
/// This module declares [`ast::Expr`], the tree built by the parser and
/// walked by the evaluator, along with the operators, the literal value type
/// and the [`ast::Span`] every node carries for diagnostics.
pub mod ast;
/// Provides the structured diagnostics raised by every stage.
///
/// A diagnostic carries message keys and parameters rather than prose,
/// together with the span of the source it points at. Turning keys into text
/// is up to the caller.
pub mod error;
/// Lexer, parser and evaluator.
///
/// Each stage is a pure function of its input; the source text is passed
/// explicitly wherever a stage needs it.
pub mod interpreter;
/// Numeric string recognition and source excerpt rendering.
pub mod util;

pub use error::{Diagnostic, DiagnosticKind};
pub use util::excerpt::render_excerpt;

/// Rejects a source longer than `max_length` bytes.
///
/// Evaluation time and memory grow with the length of the input, so hosts
/// evaluating untrusted text should call this first. Nesting depth is bounded
/// separately by the parser.
///
/// # Errors
/// Returns an `expressions-too-long` diagnostic highlighting the text past the
/// limit.
///
/// # Example
/// ```
/// use expressions::check_length;
///
/// assert!(check_length("true", 4).is_ok());
/// assert_eq!(check_length("false", 4).unwrap_err().key(), "expressions-too-long");
/// ```
pub fn check_length(source: &str, max_length: usize) -> Result<(), Diagnostic> {
    if source.len() > max_length {
        return Err(too_long(source, max_length));
    }
    Ok(())
}

/// Lexes and parses `source` without evaluating it.
///
/// # Errors
/// Returns the first lexing or parsing diagnostic.
///
/// # Example
/// ```
/// use expressions::parse_expression;
///
/// let expr = parse_expression("  (true)  ").unwrap();
/// assert_eq!((expr.span.start, expr.span.end), (2, 8));
/// assert!(parse_expression("").unwrap().is_empty());
/// ```
pub fn parse_expression(source: &str) -> Result<Expr, Diagnostic> {
    let tokens = lex(source)?;
    parse(source, &tokens)
}

/// Evaluates an expression.
///
/// This is the single entry point combining lexing, parsing and evaluation.
/// The empty expression (no tokens at all) evaluates to `None`.
///
/// # Errors
/// Returns the first diagnostic raised by any stage; nothing is evaluated
/// past it.
///
/// # Examples
/// ```
/// use expressions::{ast::LiteralValue, evaluate_expression};
///
/// assert_eq!(evaluate_expression("1 > 0 && (\"a\" === \"a\")").unwrap(),
///            Some(LiteralValue::Boolean(true)));
/// assert_eq!(evaluate_expression("   ").unwrap(), None);
///
/// let error = evaluate_expression("true > false").unwrap_err();
/// assert_eq!(error.key(), "expressions-invalid-type");
/// ```
pub fn evaluate_expression(source: &str) -> Result<Option<LiteralValue>, Diagnostic> {
    let expr = parse_expression(source)?;
    let value = Evaluator::evaluate(&expr)?;
    log::debug!("evaluated {source:?} to {value:?}");
    Ok(value)
}

/// Evaluates an expression and picks one of two branches.
///
/// Returns `consequent` if the result is truthy and `alternate` otherwise,
/// including when the expression is empty.
///
/// # Errors
/// Returns the diagnostic from [`evaluate_expression`].
///
/// # Example
/// ```
/// use expressions::evaluate_branch;
///
/// assert_eq!(evaluate_branch("2 >= 1", "yes", "no").unwrap(), "yes");
/// assert_eq!(evaluate_branch("", "yes", "no").unwrap(), "no");
/// ```
pub fn evaluate_branch<'a>(source: &str,
                           consequent: &'a str,
                           alternate: &'a str)
                           -> Result<&'a str, Diagnostic> {
    let truthy = evaluate_expression(source)?.is_some_and(|value| value.is_truthy());
    Ok(if truthy { consequent } else { alternate })
}
