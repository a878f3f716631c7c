use crate::{
    ast::{BinaryOperator, Expr, LiteralValue},
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Evaluates a logical operation.
    ///
    /// Operands of any type are accepted and converted with
    /// [`LiteralValue::is_truthy`]. `And`, `Or` and `Implies` short-circuit:
    /// the right operand is not evaluated at all once the left one decides
    /// the result, so `false && !1` is `false` rather than a type error.
    /// `Xor` always evaluates both operands.
    ///
    /// # Example
    /// ```
    /// use expressions::{ast::LiteralValue, evaluate_expression};
    ///
    /// assert_eq!(evaluate_expression("false -> !1").unwrap(),
    ///            Some(LiteralValue::Boolean(true)));
    /// assert_eq!(evaluate_expression("1 xor \"\"").unwrap(),
    ///            Some(LiteralValue::Boolean(true)));
    /// ```
    pub fn eval_logic(op: BinaryOperator, left: &Expr, right: &Expr) -> EvalResult<LiteralValue> {
        use BinaryOperator::{And, Implies, Or, Xor};

        let left = Self::eval_operand(left)?.is_truthy();

        let result = match op {
            And => left && Self::eval_operand(right)?.is_truthy(),
            Or => left || Self::eval_operand(right)?.is_truthy(),
            Implies => !left || Self::eval_operand(right)?.is_truthy(),
            Xor => left ^ Self::eval_operand(right)?.is_truthy(),
            _ => unreachable!("eval_logic used with non logical operator"),
        };

        Ok(result.into())
    }
}
