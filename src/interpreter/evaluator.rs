/// Core evaluation logic.
///
/// Contains the [`core::Evaluator`], the dispatch over expression nodes and
/// the result type shared by the other evaluator modules.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the logical operators with short-circuiting, strict and loose
/// equality, and the type-checked relational comparisons.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements boolean and arithmetic negation, both type-checked.
pub mod unary;

/// Utility functions for the evaluator.
///
/// Provides strict and loose equality over literal values.
pub mod utils;
