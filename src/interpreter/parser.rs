/// Parser state, the entry point and the top of the grammar.
///
/// Defines [`core::Parser`], which walks a token slice with a cursor, and
/// [`core::parse`], which turns a whole token slice into one expression.
pub mod core;

/// Binary operator parsing.
///
/// One method per precedence level, from equality (loosest) down to
/// comparison (tightest). Every level is left-associative.
pub mod binary;

/// Unary, literal and parenthesized expressions.
pub mod unary;

/// Cursor helpers and the unclosed-parenthesis scan.
pub mod utils;
