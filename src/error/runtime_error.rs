use crate::{
    ast::{BinaryOperator, LiteralValue, Span, UnaryOperator},
    error::diagnostic::{Diagnostic, DiagnosticKind, Message},
    interpreter::value::ValueType,
};

pub const INVALID_TYPE: &str = "expressions-invalid-type";
pub const INVALID_TYPE_OPERAND: &str = "expressions-invalid-type-operand";
pub const HINT_EXPECTED_TYPE: &str = "expressions-hint-expected-type";
pub const MISSING_VALUE: &str = "expressions-missing-value";

/// Returns the message fragment naming an operator, e.g.
/// `expressions-operator-greater(">")`.
#[must_use]
pub fn operator_fragment(key: &'static str, symbol: &str) -> Message {
    Message::new(key).with_param(symbol)
}

/// Message key of the fragment describing a binary operator.
#[must_use]
pub const fn binary_operator_key(op: BinaryOperator) -> &'static str {
    match op {
        BinaryOperator::And => "expressions-operator-conjunction",
        BinaryOperator::Or => "expressions-operator-disjunction",
        BinaryOperator::Xor => "expressions-operator-xor",
        BinaryOperator::Implies => "expressions-operator-implication",
        BinaryOperator::StrictEqual => "expressions-operator-equality",
        BinaryOperator::StrictNotEqual => "expressions-operator-not-equality",
        BinaryOperator::Equal => "expressions-operator-equals",
        BinaryOperator::NotEqual => "expressions-operator-not-equals",
        BinaryOperator::Greater => "expressions-operator-greater",
        BinaryOperator::Less => "expressions-operator-less",
        BinaryOperator::GreaterEqual => "expressions-operator-greater-equal",
        BinaryOperator::LessEqual => "expressions-operator-less-equal",
    }
}

/// Message key of the fragment describing a unary operator.
#[must_use]
pub const fn unary_operator_key(op: UnaryOperator) -> &'static str {
    match op {
        UnaryOperator::Not => "expressions-operator-not",
        UnaryOperator::Negate => "expressions-operator-minus",
    }
}

/// Builds the diagnostic for an operand of the wrong type.
///
/// The main message names the type found and the type required, the
/// submessage embeds the operator as a nested fragment, and the hint repeats
/// the required type.
///
/// # Parameters
/// - `operator`: Fragment produced by [`operator_fragment`].
/// - `expected`: The type the operator requires.
/// - `actual`: The operand value that was rejected.
/// - `span`: The part of the source to highlight.
#[must_use]
pub fn invalid_type(operator: Message,
                    expected: ValueType,
                    actual: &LiteralValue,
                    span: Span)
                    -> Diagnostic {
    let actual = actual.type_name();

    Diagnostic::new(DiagnosticKind::Type,
                    Message::new(INVALID_TYPE).with_param(actual)
                                              .with_param(expected.name()),
                    span).with_submessage(Message::new(INVALID_TYPE_OPERAND).with_param(operator)
                                                                     .with_param(actual))
                         .with_hint(Message::new(HINT_EXPECTED_TYPE).with_param(expected.name()))
}

/// Builds the diagnostic for an operand that produced no value.
#[must_use]
pub fn missing_value(span: Span) -> Diagnostic {
    Diagnostic::new(DiagnosticKind::MissingValue, Message::new(MISSING_VALUE), span)
}
