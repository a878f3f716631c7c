use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, Span},
    error::runtime_error::{binary_operator_key, invalid_type, operator_fragment},
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::{loose_eq, strict_eq},
        },
        value::ValueType,
    },
};

/// Maps an equality-style operator and a boolean equality result to the
/// final boolean value, inverting it for the negated variants.
#[must_use]
pub fn equality_op_result(op: BinaryOperator, is_equal: bool) -> bool {
    match op {
        BinaryOperator::StrictEqual | BinaryOperator::Equal => is_equal,
        BinaryOperator::StrictNotEqual | BinaryOperator::NotEqual => !is_equal,
        _ => unreachable!("equality_op_result used with non equality operator"),
    }
}

impl Evaluator {
    /// Evaluates an equality comparison.
    ///
    /// `===` and `!==` compare strictly: values are equal only if both their
    /// type and their value match. `==` and `!=` compare loosely, after the
    /// coercions described in [`loose_eq`].
    ///
    /// # Example
    /// ```
    /// use expressions::{ast::LiteralValue, evaluate_expression};
    ///
    /// assert_eq!(evaluate_expression("1 === \"1\"").unwrap(),
    ///            Some(LiteralValue::Boolean(false)));
    /// assert_eq!(evaluate_expression("1 == \"1\"").unwrap(),
    ///            Some(LiteralValue::Boolean(true)));
    /// ```
    pub fn eval_equality(op: BinaryOperator, left: &Expr, right: &Expr) -> EvalResult<LiteralValue> {
        let left = Self::eval_operand(left)?;
        let right = Self::eval_operand(right)?;

        let is_equal = match op {
            BinaryOperator::StrictEqual | BinaryOperator::StrictNotEqual => {
                strict_eq(&left, &right)
            },
            _ => loose_eq(&left, &right),
        };

        Ok(equality_op_result(op, is_equal).into())
    }

    /// Evaluates a relational comparison (`>`, `<`, `>=`, `<=`).
    ///
    /// Both operands must be numbers. A mismatch on either side is reported
    /// with `span`, the span of the whole comparison.
    pub fn eval_relational(op: BinaryOperator,
                           symbol: &str,
                           left: &Expr,
                           right: &Expr,
                           span: Span)
                           -> EvalResult<LiteralValue> {
        let left = Self::expect_number(op, symbol, left, span)?;
        let right = Self::expect_number(op, symbol, right, span)?;

        Ok(LiteralValue::Boolean(match op {
                                     BinaryOperator::Greater => left > right,
                                     BinaryOperator::Less => left < right,
                                     BinaryOperator::GreaterEqual => left >= right,
                                     BinaryOperator::LessEqual => left <= right,
                                     _ => unreachable!(),
                                 }))
    }

    fn expect_number(op: BinaryOperator,
                     symbol: &str,
                     operand: &Expr,
                     span: Span)
                     -> EvalResult<f64> {
        let value = Self::eval_operand(operand)?;
        value.as_number().ok_or_else(|| {
                             invalid_type(operator_fragment(binary_operator_key(op), symbol),
                                          ValueType::Number,
                                          &value,
                                          span)
                         })
    }
}
