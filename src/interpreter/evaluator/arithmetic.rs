use crate::{
    ast::{Expr, Operator},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Applies an operator to two evaluated operands.
///
/// # Errors
/// `DivisionByZero` when `op` is `Div` and `right` is exactly `0.0` (or
/// `-0.0`). No tolerance is applied.
///
/// # Example
/// ```
/// use dualcalc::{ast::Operator, interpreter::evaluator::arithmetic::apply};
///
/// assert_eq!(apply(Operator::Mul, 6.0, 7.0, 0), Ok(42.0));
/// assert!(apply(Operator::Div, 1.0, 0.0, 0).is_err());
/// ```
#[allow(clippy::float_cmp)]
pub fn apply(op: Operator, left: f64, right: f64, position: usize) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Sub => Ok(left - right),
        Operator::Mul => Ok(left * right),
        Operator::Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            Ok(left / right)
        },
    }
}

/// Folds the operands of a variadic node.
///
/// `+` and `*` start from their identity (`0` and `1`) and combine every
/// operand. `-` and `/` start from the first operand and combine it with
/// each following one in order, so `(- 10 1 2)` is `10 - 1 - 2` and a single
/// operand evaluates to itself.
///
/// # Errors
/// - `DivisionByZero` at the first divisor that is exactly `0.0`.
/// - `EmptyOperation` for `-` or `/` without operands, which the parser
///   never builds.
pub fn fold(op: Operator, operands: &[Expr], position: usize) -> EvalResult<f64> {
    let (seed, rest) = match op {
        Operator::Add => (0.0, operands),
        Operator::Mul => (1.0, operands),
        Operator::Sub | Operator::Div => {
            let Some((first, rest)) = operands.split_first() else {
                return Err(RuntimeError::EmptyOperation { operator: op.symbol(),
                                                          position });
            };
            (first.evaluate()?, rest)
        },
    };

    rest.iter().try_fold(seed, |acc, operand| apply(op, acc, operand.evaluate()?, position))
}
