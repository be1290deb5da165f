use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            infix::parse_infix,
            literal::{join_sign, looks_numeric},
            prefix::parse_prefix,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of operation nodes either parser will build.
///
/// Parsing, evaluating, rendering and dropping a tree all recurse once per
/// level, so input nested deeper than this is rejected instead of running
/// out of stack.
pub const MAX_DEPTH: usize = 512;

/// The two notations an input line may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// Conventional notation with precedence, e.g. `1 + 2 * 3`.
    Infix,
    /// Fully parenthesized prefix notation, e.g. `(+ 1 (* 2 3))`.
    Prefix,
}

/// Decides which grammar a token stream is written in.
///
/// Input that opens with `(` followed by something other than a number, a
/// signed number or another `(` is a prefix form: `(+ 1 2)`, but also
/// broken forms such as `(^ 2 3)`, `(x 1 2)`, `(+ 1` or `()`, which the
/// prefix parser reports precisely.
/// Everything else, including parenthesized infix such as `(2 + 3) * 4` or
/// `(-3) * 2`, is infix.
///
/// # Errors
/// `EmptyInput` when there are no tokens.
///
/// # Example
/// ```
/// use dualcalc::{
///     interpreter::parser::core::{Grammar, detect_grammar},
///     tokenize,
/// };
///
/// assert_eq!(detect_grammar(&tokenize("(* 2 3)")), Ok(Grammar::Prefix));
/// assert_eq!(detect_grammar(&tokenize("(2 + 3) * 4")), Ok(Grammar::Infix));
/// assert!(detect_grammar(&tokenize("   ")).is_err());
/// ```
pub fn detect_grammar(tokens: &[(Token, usize)]) -> ParseResult<Grammar> {
    match tokens {
        [] => Err(ParseError::EmptyInput),
        [(Token::LParen, _), rest @ ..] => match rest.first() {
            Some((Token::LParen, _)) => Ok(Grammar::Infix),
            Some((Token::Number(text), _)) if looks_numeric(text) => Ok(Grammar::Infix),
            Some((Token::Minus, position)) if join_sign(*position, rest.get(1)).is_some() => {
                Ok(Grammar::Infix)
            },
            _ => Ok(Grammar::Prefix),
        },
        _ => Ok(Grammar::Infix),
    }
}

/// Parses a complete token stream into an expression tree.
///
/// This is the entry point for parsing. It picks the grammar with
/// [`detect_grammar`] and propagates every error of the chosen parser
/// unchanged.
///
/// # Parameters
/// - `tokens`: The output of [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The root of the parsed tree.
pub fn parse_tokens(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    match detect_grammar(tokens)? {
        Grammar::Prefix => parse_prefix(&mut tokens.iter().peekable()),
        Grammar::Infix => parse_infix(tokens),
    }
}
