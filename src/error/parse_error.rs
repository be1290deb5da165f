use thiserror::Error;

use crate::error::ErrorKind;

/// Represents all errors that can occur while parsing.
///
/// Positions are byte offsets into the source line; messages report them as
/// 1-based columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained nothing but whitespace.
    #[error("Error: Empty input, nothing to evaluate.")]
    EmptyInput,
    /// Found a token that cannot appear at this point.
    #[error("Error at column {}: Unexpected token: {token}.", .position + 1)]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// The input ended in the middle of an expression.
    #[error("Error at column {}: Unexpected end of input.", .position + 1)]
    UnexpectedEndOfInput {
        /// Byte offset of the construct that was left unfinished.
        position: usize,
    },
    /// A prefix form did not start with an operator.
    #[error("Error at column {}: Expected an operator after '(', found {token}.", .position + 1)]
    ExpectedOperator {
        /// The token found in operator position.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// A prefix form had an operator but no operands, e.g. `(+ )`.
    #[error("Error at column {}: Operator '{operator}' needs at least one operand.", .position + 1)]
    MissingOperands {
        /// The operator of the empty form.
        operator: char,
        /// Byte offset of the opening parenthesis.
        position: usize,
    },
    /// An infix operator lacks a left or right operand, e.g. `1 +`.
    #[error("Error at column {}: Operator '{operator}' is missing an operand.", .position + 1)]
    MissingOperand {
        /// The operator that could not be applied.
        operator: char,
        /// Byte offset of the operator.
        position: usize,
    },
    /// Operands were left over without an operator joining them, e.g. `1 2`.
    #[error("Error: {count} operands are not joined by an operator.")]
    DanglingOperands {
        /// Number of unconnected subexpressions.
        count: usize,
    },
    /// Operations are nested deeper than the parser allows.
    #[error("Error at column {}: Expression is nested deeper than {limit} levels.", .position + 1)]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:    usize,
        /// Byte offset of the operation that went past the limit.
        position: usize,
    },
    /// A `(` was never closed.
    #[error("Error at column {}: Expected closing parenthesis ')' but none found.", .position + 1)]
    ExpectedClosingParen {
        /// Byte offset of the unclosed `(`.
        position: usize,
    },
    /// A `)` appeared without a matching `(`.
    #[error("Error at column {}: Closing parenthesis ')' has no matching '('.", .position + 1)]
    UnmatchedClosingParen {
        /// Byte offset of the `)`.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error at column {}: Extra tokens after expression: {token}.", .position + 1)]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// An operator symbol outside of `+ - * /`.
    #[error("Error at column {}: Unsupported operator: {symbol}.", .position + 1)]
    UnsupportedOperator {
        /// The symbol as written.
        symbol:   String,
        /// Byte offset of the symbol.
        position: usize,
    },
    /// A token in number position is not a valid number.
    #[error("Error at column {}: Malformed number: {literal}.", .position + 1)]
    MalformedLiteral {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
}

impl ParseError {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use dualcalc::error::{ErrorKind, ParseError};
    ///
    /// let err = ParseError::MissingOperands { operator: '+',
    ///                                         position: 0, };
    /// assert_eq!(err.kind(), ErrorKind::Syntax);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::UnsupportedOperator { .. } => ErrorKind::UnsupportedOperator,
            Self::MalformedLiteral { .. } => ErrorKind::MalformedLiteral,
            Self::UnexpectedToken { .. }
            | Self::UnexpectedEndOfInput { .. }
            | Self::ExpectedOperator { .. }
            | Self::MissingOperands { .. }
            | Self::MissingOperand { .. }
            | Self::DanglingOperands { .. }
            | Self::NestingTooDeep { .. }
            | Self::ExpectedClosingParen { .. }
            | Self::UnmatchedClosingParen { .. }
            | Self::UnexpectedTrailingTokens { .. } => ErrorKind::Syntax,
        }
    }
}
