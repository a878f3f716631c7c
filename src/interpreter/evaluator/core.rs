use crate::{
    ast::{Expr, ExprKind, LiteralValue},
    error::{Diagnostic, runtime_error::missing_value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`Diagnostic`] describing the failure.
pub type EvalResult<T> = Result<T, Diagnostic>;

/// Tree-walking interpreter over [`Expr`] trees.
///
/// Evaluation has no state: every call is a pure function of the tree it is
/// given. Recursion depth follows the nesting depth of the tree.
pub struct Evaluator;

impl Evaluator {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// Literals evaluate to themselves. The empty expression yields `None`.
    /// Operators are dispatched to [`Self::eval_unary`] and
    /// [`Self::eval_binary`].
    ///
    /// # Errors
    /// Returns a type-mismatch diagnostic if an operator receives an operand
    /// of a type it does not accept.
    ///
    /// # Example
    /// ```
    /// use expressions::{
    ///     ast::{Expr, ExprKind, LiteralValue, Span},
    ///     interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// let leaf = Expr::new(ExprKind::Literal(LiteralValue::Number(2.0)), Span::new(0, 1));
    /// assert_eq!(Evaluator::evaluate(&leaf).unwrap(), Some(LiteralValue::Number(2.0)));
    /// assert_eq!(Evaluator::evaluate(&Expr::empty()).unwrap(), None);
    /// ```
    pub fn evaluate(expr: &Expr) -> EvalResult<Option<LiteralValue>> {
        match &expr.kind {
            ExprKind::Empty => Ok(None),
            ExprKind::Literal(value) => Ok(Some(value.clone())),
            ExprKind::Unary { op, symbol, operand } => {
                Self::eval_unary(*op, symbol, operand).map(Some)
            },
            ExprKind::Binary { op,
                               symbol,
                               left,
                               right, } => {
                Self::eval_binary(*op, symbol, left, right, expr.span).map(Some)
            },
        }
    }

    /// Evaluates an operand that must produce a value.
    pub(crate) fn eval_operand(expr: &Expr) -> EvalResult<LiteralValue> {
        Self::evaluate(expr)?.ok_or_else(|| missing_value(expr.span))
    }
}
