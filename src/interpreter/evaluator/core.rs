use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::arithmetic::{apply, fold},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Expr {
    /// Evaluates the tree and returns its value.
    ///
    /// Children are evaluated depth-first, left to right. Evaluation has no
    /// side effects and leaves the tree untouched.
    ///
    /// # Errors
    /// `DivisionByZero` when any divisor evaluates to exactly `0.0`.
    ///
    /// # Example
    /// ```
    /// use dualcalc::ast::{Expr, Operator};
    ///
    /// let tree = Expr::binary(Operator::Sub, Expr::literal(10.0), Expr::literal(4.0), 3);
    /// assert_eq!(tree.evaluate(), Ok(6.0));
    ///
    /// let tree = Expr::binary(Operator::Div, Expr::literal(1.0), Expr::literal(0.0), 2);
    /// assert!(tree.evaluate().is_err());
    /// ```
    pub fn evaluate(&self) -> EvalResult<f64> {
        match self {
            Self::Literal { value } => Ok(*value),
            Self::BinaryOp { op,
                             left,
                             right,
                             position, } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                apply(*op, left, right, *position)
            },
            Self::VariadicOp { op,
                               operands,
                               position, } => fold(*op, operands, *position),
        }
    }
}
