/// Dispatch of binary operations to their handlers.
pub mod core;

/// Short-circuiting logical operators and exclusive or.
pub mod logic;

/// Equality and relational comparisons.
pub mod comparison;
