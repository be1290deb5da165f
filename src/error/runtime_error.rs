use thiserror::Error;

use crate::error::ErrorKind;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A divisor evaluated to exactly `0.0`.
    #[error("Error at column {}: Cannot divide by zero.", .position + 1)]
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
    /// A `-` or `/` node was built by hand without any operands.
    #[error("Error at column {}: Operator '{operator}' has no operands to fold.", .position + 1)]
    EmptyOperation {
        /// The operator of the empty node.
        operator: char,
        /// Byte offset of the operator.
        position: usize,
    },
}

impl RuntimeError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::EmptyOperation { .. } => ErrorKind::Syntax,
        }
    }
}
