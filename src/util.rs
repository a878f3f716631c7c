/// Numeric string recognition.
///
/// Decides whether a string holds a number, which loose equality uses to
/// compare strings with numbers.
pub mod num;
/// Source excerpts for diagnostics.
///
/// Renders a bounded window of the expression text with a marker line under
/// the span a diagnostic points at.
pub mod excerpt;
