use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::runtime_error::{invalid_type, operator_fragment, unary_operator_key},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::ValueType,
    },
};

impl Evaluator {
    /// Evaluates a unary operation.
    ///
    /// - `Not` requires a boolean and returns its negation.
    /// - `Negate` requires a number and returns its arithmetic negation.
    ///
    /// A mismatch is reported with the span of the operand.
    ///
    /// # Example
    /// ```
    /// use expressions::{ast::LiteralValue, evaluate_expression};
    ///
    /// assert_eq!(evaluate_expression("--2").unwrap(), Some(LiteralValue::Number(2.0)));
    /// assert_eq!(evaluate_expression("~false").unwrap(), Some(LiteralValue::Boolean(true)));
    /// assert!(evaluate_expression("!1").is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, symbol: &str, operand: &Expr) -> EvalResult<LiteralValue> {
        let value = Self::eval_operand(operand)?;

        let (result, expected) = match op {
            UnaryOperator::Not => {
                (value.as_bool().map(|b| LiteralValue::from(!b)), ValueType::Boolean)
            },
            UnaryOperator::Negate => {
                (value.as_number().map(|n| LiteralValue::from(-n)), ValueType::Number)
            },
        };

        result.ok_or_else(|| {
                  invalid_type(operator_fragment(unary_operator_key(op), symbol),
                               expected,
                               &value,
                               operand.span)
              })
    }
}
