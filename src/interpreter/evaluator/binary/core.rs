use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, Span},
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Evaluates a binary operation.
    ///
    /// Operands are passed unevaluated so that the logical operators can
    /// short-circuit. Logical operators go to `eval_logic`, equality
    /// operators to `eval_equality` and relational operators to
    /// `eval_relational`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `symbol`: The operator as spelled in the source.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `span`: Span of the whole operation, used for type errors.
    ///
    /// # Returns
    /// The boolean result of the operation.
    pub fn eval_binary(op: BinaryOperator,
                       symbol: &str,
                       left: &Expr,
                       right: &Expr,
                       span: Span)
                       -> EvalResult<LiteralValue> {
        use BinaryOperator::{
            And, Equal, Greater, GreaterEqual, Implies, Less, LessEqual, NotEqual, Or,
            StrictEqual, StrictNotEqual, Xor,
        };

        match op {
            And | Or | Implies | Xor => Self::eval_logic(op, left, right),
            StrictEqual | StrictNotEqual | Equal | NotEqual => {
                Self::eval_equality(op, left, right)
            },
            Greater | Less | GreaterEqual | LessEqual => {
                Self::eval_relational(op, symbol, left, right, span)
            },
        }
    }
}
