use crate::{
    ast::{Expr, Operator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{MAX_DEPTH, ParseResult},
            literal::{is_operator_symbol, join_sign, parse_literal},
        },
    },
};

/// Parses an infix token stream into a tree of binary nodes.
///
/// Runs [`infix_to_postfix`] and reduces the result with [`build_tree`].
///
/// # Example
/// ```
/// use dualcalc::{interpreter::parser::infix::parse_infix, tokenize};
///
/// let tree = parse_infix(&tokenize("2 + 3 * 4")).unwrap();
/// assert_eq!(tree.evaluate(), Ok(14.0));
/// ```
pub fn parse_infix(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let postfix = infix_to_postfix(tokens)?;
    build_tree(&postfix)
}

/// Reorders infix tokens into postfix order (shunting-yard).
///
/// Numbers go straight to the output, including a `-` written directly in
/// front of a number where an operand is expected (`-3 + 4`, `2 * -3`),
/// which becomes a negative literal. An operator first moves every stacked
/// operator of equal or higher priority to the output, which makes all
/// operators left-associative, and is then stacked itself. `(` is stacked
/// as a barrier; `)` unwinds the stack down to its matching `(` and drops
/// both. Whatever remains on the stack is appended at the end.
///
/// Operands and operators must alternate: a number or `(` may only appear
/// where an operand is expected, an operator or `)` only after an operand.
///
/// # Errors
/// - `MissingOperand` for an operator without a left operand, as in `+ 1`.
/// - `UnexpectedToken` for a number or `(` right after an operand, as in
///   `1 2 +`, or a `)` right after an operator or `(`.
/// - `UnmatchedClosingParen` for a `)` without a matching `(`.
/// - `ExpectedClosingParen` for a `(` that is never closed.
/// - `UnsupportedOperator` for a punctuation token such as `^`.
///
/// # Example
/// ```
/// use dualcalc::{interpreter::parser::infix::infix_to_postfix, tokenize};
///
/// let postfix = infix_to_postfix(&tokenize("(1 + 2) * 3")).unwrap();
/// let text: Vec<String> = postfix.iter().map(|(t, _)| t.to_string()).collect();
/// assert_eq!(text, ["1", "2", "+", "3", "*"]);
///
/// assert!(infix_to_postfix(&tokenize("1 2 +")).is_err());
/// ```
pub fn infix_to_postfix(tokens: &[(Token, usize)]) -> ParseResult<Vec<(Token, usize)>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<&(Token, usize)> = Vec::new();
    let mut entries = tokens.iter().peekable();
    let mut expect_operand = true;

    while let Some(entry) = entries.next() {
        let (token, position) = entry;

        if *token == Token::Minus
           && expect_operand
           && let Some(literal) = join_sign(*position, entries.peek().copied())
        {
            entries.next();
            output.push((Token::Number(literal), *position));
            expect_operand = false;
            continue;
        }

        if let Some(op) = Operator::from_token(token) {
            if expect_operand {
                return Err(ParseError::MissingOperand { operator: op.symbol(),
                                                        position: *position, });
            }
            while let Some(top) = stack.last()
                  && let Some(top_op) = Operator::from_token(&top.0)
                  && top_op.priority() >= op.priority()
            {
                output.push((*top).clone());
                stack.pop();
            }
            stack.push(entry);
            expect_operand = true;
            continue;
        }

        match token {
            Token::Number(text) if is_operator_symbol(text) => {
                return Err(ParseError::UnsupportedOperator { symbol:   text.clone(),
                                                             position: *position, });
            },
            Token::Number(_) | Token::LParen if !expect_operand => {
                return Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                         position: *position, });
            },
            Token::RParen if expect_operand => {
                return Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                         position: *position, });
            },
            Token::Number(_) => {
                output.push(entry.clone());
                expect_operand = false;
            },
            Token::LParen => stack.push(entry),
            Token::RParen => loop {
                match stack.pop() {
                    Some((Token::LParen, _)) => break,
                    Some(op) => output.push(op.clone()),
                    None => {
                        return Err(ParseError::UnmatchedClosingParen { position: *position });
                    },
                }
            },
            Token::Plus | Token::Minus | Token::Star | Token::Slash | Token::Ignored => {},
        }
    }

    while let Some(entry) = stack.pop() {
        if let (Token::LParen, position) = entry {
            return Err(ParseError::ExpectedClosingParen { position: *position });
        }
        output.push(entry.clone());
    }

    Ok(output)
}

/// Reduces a postfix token sequence into a single tree.
///
/// Numbers push literal leaves onto a node stack. Each operator pops its
/// right operand, then its left operand, and pushes the combined node.
/// Exactly one node must remain at the end.
///
/// # Errors
/// - `MalformedLiteral` when a number token is not a valid number.
/// - `MissingOperand` when an operator finds fewer than two nodes.
/// - `NestingTooDeep` when the tree would be deeper than
///   [`MAX_DEPTH`](crate::interpreter::parser::core::MAX_DEPTH), as for a
///   very long chain like `1 + 1 + ... + 1`.
/// - `UnexpectedEndOfInput` when the sequence is empty.
/// - `DanglingOperands` when more than one node remains.
/// - `UnexpectedToken` for parentheses, which never occur in postfix.
pub fn build_tree(postfix: &[(Token, usize)]) -> ParseResult<Expr> {
    // Each node is paired with the number of operation levels below it.
    let mut stack: Vec<(Expr, usize)> = Vec::new();

    for (token, position) in postfix {
        if let Token::Number(text) = token {
            stack.push((Expr::literal(parse_literal(text, *position)?), 0));
            continue;
        }

        let Some(op) = Operator::from_token(token) else {
            return Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                     position: *position, });
        };

        let (Some((right, right_depth)), Some((left, left_depth))) = (stack.pop(), stack.pop())
        else {
            return Err(ParseError::MissingOperand { operator: op.symbol(),
                                                    position: *position, });
        };

        let depth = left_depth.max(right_depth) + 1;
        if depth > MAX_DEPTH {
            return Err(ParseError::NestingTooDeep { limit:    MAX_DEPTH,
                                                    position: *position, });
        }

        stack.push((Expr::binary(op, left, right, *position), depth));
    }

    let end = postfix.last().map_or(0, |(_, position)| *position);
    let (root, _) = stack.pop()
                         .ok_or(ParseError::UnexpectedEndOfInput { position: end })?;

    if !stack.is_empty() {
        return Err(ParseError::DanglingOperands { count: stack.len() + 1 });
    }

    Ok(root)
}
