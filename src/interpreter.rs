/// The evaluator module executes expression trees and computes results.
///
/// The evaluator walks the tree, applies each operator to the values of its
/// operands and produces a single literal value, or a diagnostic when an
/// operand has the wrong type.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// Each token records its matched text, its kind and the byte offset where
/// it starts, so later stages can point diagnostics at it.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// A recursive-descent parser with one function per precedence level. Every
/// node it builds carries the span of source text it covers.
pub mod parser;
/// Helpers on the runtime value type.
///
/// Type names, truthiness and display for [`crate::ast::LiteralValue`].
pub mod value;
