use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
    util::constants,
};

/// Converts the text of a number token into its value.
///
/// Accepts an optional leading `-` followed by either a decimal number
/// (`42`, `3.14`, `.5`) or the name of a constant. Anything else,
/// including words like `inf` that the standard float parser would accept,
/// is a malformed literal.
///
/// Only unsigned exponents work: `2e10` is a single token, but the
/// tokenizer always splits at `+` and `-`, so `1e-5` arrives as `1e`, `-`,
/// `5` and `1e` is rejected here as malformed.
///
/// # Errors
/// `MalformedLiteral` carrying the original text and `position`.
///
/// # Example
/// ```
/// use dualcalc::interpreter::parser::literal::parse_literal;
///
/// assert_eq!(parse_literal("-2.5", 0), Ok(-2.5));
/// assert!(parse_literal("1.2.3", 0).is_err());
/// assert!(parse_literal("inf", 0).is_err());
/// ```
pub fn parse_literal(text: &str, position: usize) -> ParseResult<f64> {
    let malformed = || ParseError::MalformedLiteral { literal: text.to_string(),
                                                      position };

    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let magnitude = if let Some(value) = constants::lookup(body) {
        value
    } else if body.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        body.parse::<f64>().map_err(|_| malformed())?
    } else {
        return Err(malformed());
    };

    Ok(if negative { -magnitude } else { magnitude })
}

/// Returns `true` when a number token is meant as a number, that is when it
/// starts like one (optionally signed) or names a constant.
///
/// This only looks at the shape of the text; `1.2.3` still counts and is
/// rejected later by [`parse_literal`].
#[must_use]
pub fn looks_numeric(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    body.starts_with(|c: char| c.is_ascii_digit() || c == '.') || constants::lookup(body).is_some()
}

/// Returns `true` when a number token consists only of punctuation, such as
/// `^`, `%` or `**`, and so was written as an operator.
#[must_use]
pub fn is_operator_symbol(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_punctuation() && c != '.')
}

/// Joins a `-` with the number token written directly after it.
///
/// Returns the signed literal text when `next` starts exactly one byte after
/// the `-` at `minus_position` and reads as a number, as in `-5` or `-pi`.
/// With any whitespace in between, the `-` stays an operator.
///
/// # Example
/// ```
/// use dualcalc::{interpreter::parser::literal::join_sign, tokenize};
///
/// let tokens = tokenize("-5 - 3");
/// assert_eq!(join_sign(0, tokens.get(1)), Some("-5".to_string()));
/// assert_eq!(join_sign(3, tokens.get(3)), None);
/// ```
#[must_use]
pub fn join_sign(minus_position: usize, next: Option<&(Token, usize)>) -> Option<String> {
    match next {
        Some((Token::Number(text), start)) if *start == minus_position + 1 && looks_numeric(text) => {
            Some(format!("-{text}"))
        },
        _ => None,
    }
}
