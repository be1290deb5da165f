//! # dualcalc
//!
//! dualcalc evaluates a single arithmetic expression written either in
//! conventional infix notation (`1 + 2 * (3 - 4)`) or in fully
//! parenthesized prefix notation (`(+ 1 (* 2 3))`).
//!
//! Input is tokenized, routed to one of two parsers, turned into an
//! expression tree and evaluated. Every failure is reported as an
//! [`Error`](error::Error) whose [`ErrorKind`](error::ErrorKind) can be
//! inspected.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::parser::core::parse_tokens,
};

/// Defines the expression tree.
///
/// This module declares the `Operator` and `Expr` types. A tree is built by
/// one of the parsers, evaluated once and dropped as a unit.
///
/// # Responsibilities
/// - Models literals, binary operations (infix) and variadic operations
///   (prefix).
/// - Records operator positions for error reporting.
/// - Renders trees in prefix notation.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines one error enum per phase and a combined `Error`.
/// - Attaches source positions for user feedback.
/// - Classifies every error into an `ErrorKind`.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
pub mod interpreter;
/// General helpers shared between phases.
pub mod util;

pub use interpreter::lexer::tokenize;

/// Parses a line of input into an expression tree without evaluating it.
///
/// # Errors
/// Returns a `ParseError` if the input is empty or does not follow the
/// grammar it was routed to.
///
/// # Examples
/// ```
/// let tree = dualcalc::parse("(* 2 3 4)").unwrap();
/// assert_eq!(tree.to_string(), "(* 2 3 4)");
///
/// assert!(dualcalc::parse("(+ 1").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    parse_tokens(&tokenize(source))
}

/// Parses and evaluates a line of input.
///
/// # Errors
/// Returns an error if parsing fails or if evaluation divides by zero.
///
/// # Examples
/// ```
/// use dualcalc::{error::ErrorKind, evaluate_str};
///
/// assert_eq!(evaluate_str("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(evaluate_str("(+ 1 (* 2 3))"), Ok(7.0));
///
/// let err = evaluate_str("(/ 1 0)").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
/// ```
pub fn evaluate_str(source: &str) -> Result<f64, Error> {
    Ok(parse(source)?.evaluate()?)
}
