/// Characters ignored around a numeric string.
const NUMERIC_PADDING: &[char] = &[' ', '\t', '\n', '\r', '\x0B', '\x0C'];

/// Parses `text` as a number if it is a numeric string.
///
/// A numeric string is a decimal number with optional sign, fraction and
/// exponent, optionally surrounded by whitespace. Spellings such as `inf` or
/// `NaN` are not numeric.
///
/// ## Returns
/// - `Some(f64)`: The parsed number.
/// - `None`: If `text` is not numeric.
///
/// ## Example
/// ```
/// use expressions::util::num::parse_numeric;
///
/// assert_eq!(parse_numeric(" 42 "), Some(42.0));
/// assert_eq!(parse_numeric("-1.5e2"), Some(-150.0));
/// assert_eq!(parse_numeric("inf"), None);
/// assert_eq!(parse_numeric("12abc"), None);
/// assert_eq!(parse_numeric(""), None);
/// ```
#[must_use]
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(NUMERIC_PADDING);

    let allowed = |b: u8| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-');
    if !trimmed.bytes().all(allowed) || !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    trimmed.parse().ok()
}
