use std::iter::Peekable;

use crate::{
    ast::{Expr, Operator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{MAX_DEPTH, ParseResult},
            literal::{is_operator_symbol, join_sign, looks_numeric, parse_literal},
        },
    },
};

/// Parses a complete prefix expression and rejects anything after it.
///
/// # Errors
/// - Every error of [`parse_form`].
/// - `UnexpectedTrailingTokens` when tokens follow the outermost `)`.
///
/// # Example
/// ```
/// use dualcalc::{interpreter::parser::prefix::parse_prefix, tokenize};
///
/// let tokens = tokenize("(- 10 1 2)");
/// let tree = parse_prefix(&mut tokens.iter().peekable()).unwrap();
/// assert_eq!(tree.evaluate(), Ok(7.0));
/// ```
pub fn parse_prefix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_form(tokens)?;

    if let Some((token, position)) = tokens.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                          position: *position, });
    }

    Ok(expr)
}

/// Parses one parenthesized prefix form.
///
/// Grammar:
/// ```text
///     form    := "(" operator operand+ ")"
///     operand := number | form
/// ```
/// Operands are collected until the closing `)`; nested forms recurse. A
/// number operand may carry a leading `-` written directly in front of it,
/// as in `(+ -5 3)`.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening `(`. On success it is
///   left just past the matching `)`.
///
/// # Returns
/// An `Expr::VariadicOp` holding every operand in source order.
///
/// # Errors
/// - `UnexpectedToken` if the form does not start with `(` or an operand is
///   neither a number nor a nested form.
/// - `ExpectedOperator` or `UnsupportedOperator` for a bad operator slot.
/// - `MissingOperands` for a form without operands, such as `(+ )`.
/// - `ExpectedClosingParen` if the input ends before the `)`.
/// - `MalformedLiteral` for a number operand that cannot be read.
/// - `NestingTooDeep` for forms nested deeper than
///   [`MAX_DEPTH`](crate::interpreter::parser::core::MAX_DEPTH).
pub fn parse_form<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_nested(tokens, 1)
}

/// Parses a form that sits `depth` levels deep, counting the outermost
/// form as level 1.
fn parse_nested<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let open = match tokens.next() {
        Some((Token::LParen, position)) => *position,
        Some((token, position)) => {
            return Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                     position: *position, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    };

    if depth > MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { limit:    MAX_DEPTH,
                                                position: open, });
    }

    let (op, op_position) = parse_operator(tokens, open)?;

    let mut operands = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::RParen, _)) => {
                tokens.next();
                break;
            },
            Some((Token::LParen, _)) => operands.push(parse_nested(tokens, depth + 1)?),
            Some((Token::Number(text), position)) if looks_numeric(text) => {
                let value = parse_literal(text, *position)?;
                tokens.next();
                operands.push(Expr::literal(value));
            },
            Some((Token::Minus, position)) => {
                let position = *position;
                let Some(literal) = join_sign(position, tokens.clone().nth(1)) else {
                    return Err(ParseError::UnexpectedToken { token: "-".to_string(),
                                                             position });
                };
                let value = parse_literal(&literal, position)?;
                tokens.next();
                tokens.next();
                operands.push(Expr::literal(value));
            },
            Some((token, position)) => {
                return Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                         position: *position, });
            },
            None => return Err(ParseError::ExpectedClosingParen { position: open }),
        }
    }

    if operands.is_empty() {
        return Err(ParseError::MissingOperands { operator: op.symbol(),
                                                 position: open, });
    }

    Ok(Expr::VariadicOp { op,
                          operands,
                          position: op_position })
}

/// Consumes the operator token that follows an opening `(`.
fn parse_operator<'a, I>(tokens: &mut Peekable<I>, open: usize) -> ParseResult<(Operator, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((token, position)) => match (Operator::from_token(token), token) {
            (Some(op), _) => Ok((op, *position)),
            (None, Token::Number(text)) if is_operator_symbol(text) => {
                Err(ParseError::UnsupportedOperator { symbol:   text.clone(),
                                                      position: *position, })
            },
            (None, _) => Err(ParseError::ExpectedOperator { token:    token.to_string(),
                                                            position: *position, }),
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: open }),
    }
}
