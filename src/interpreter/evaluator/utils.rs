use crate::{ast::LiteralValue, util::num::parse_numeric};

/// Compares two values strictly: equal only if both type and value match.
#[must_use]
pub fn strict_eq(left: &LiteralValue, right: &LiteralValue) -> bool {
    left == right
}

/// Compares two values after implicit type coercion.
///
/// 1. Values of the same type compare by value.
/// 2. If either side is a boolean, the other side is converted with
///    [`LiteralValue::is_truthy`].
/// 3. A number and a numeric string compare numerically; a number and any
///    other string compare as text, using the number's display form.
/// 4. Two strings compare numerically if both are numeric, otherwise as
///    text.
///
/// # Example
/// ```
/// use expressions::{ast::LiteralValue, interpreter::evaluator::utils::loose_eq};
///
/// assert!(loose_eq(&LiteralValue::Number(1.0), &LiteralValue::from(" 1.0")));
/// assert!(loose_eq(&LiteralValue::from("10"), &LiteralValue::from("1e1")));
/// assert!(loose_eq(&LiteralValue::Boolean(true), &LiteralValue::from("yes")));
/// assert!(!loose_eq(&LiteralValue::Number(0.0), &LiteralValue::from("a")));
/// ```
#[must_use]
pub fn loose_eq(left: &LiteralValue, right: &LiteralValue) -> bool {
    use LiteralValue::{Boolean, Number, String};

    match (left, right) {
        (Boolean(a), b) | (b, Boolean(a)) => *a == b.is_truthy(),
        (Number(a), Number(b)) => a == b,
        (Number(n), String(s)) | (String(s), Number(n)) => match parse_numeric(s) {
            Some(parsed) => parsed == *n,
            None => n.to_string() == *s,
        },
        (String(a), String(b)) => match (parse_numeric(a), parse_numeric(b)) {
            (Some(a), Some(b)) => a == b,
            _ => a == b,
        },
    }
}
