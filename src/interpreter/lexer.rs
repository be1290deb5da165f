use std::fmt;

use logos::Logos;

/// Represents a lexical token of either grammar.
///
/// Numbers are kept as written; turning them into values (and rejecting
/// malformed ones) is left to the parser.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Any run of characters that are not whitespace, parentheses or
    /// operator symbols, such as `42`, `3.14`, `.5` or `pi`.
    #[regex(r"[^ \t\r\n\f\x0B()+\-*/]+", |lex| lex.slice().to_string())]
    Number(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Whitespace, including vertical tab.
    #[regex(r"[ \t\r\n\f\x0B]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns `true` for the four operator tokens.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Splits source text into tokens paired with their byte offsets.
///
/// Whitespace separates tokens and is dropped. Parentheses and operator
/// symbols are always single-character tokens; every other character is
/// absorbed into the surrounding number token. Tokenizing never fails.
///
/// A `-` is always its own token, even in `-5`. The parsers decide whether
/// it is a sign, since only they know where an operand is expected.
///
/// # Example
/// ```
/// use dualcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(+ -5 3.2)");
/// assert_eq!(tokens,
///            vec![(Token::LParen, 0),
///                 (Token::Plus, 1),
///                 (Token::Minus, 3),
///                 (Token::Number("5".to_string()), 4),
///                 (Token::Number("3.2".to_string()), 6),
///                 (Token::RParen, 9)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        // Every character matches some rule, but a lexer error still must not
        // lose input.
        let token = result.unwrap_or_else(|()| Token::Number(lexer.slice().to_string()));
        tokens.push((token, lexer.span().start));
    }

    tokens
}
