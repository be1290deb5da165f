use std::fmt;

/// Parsing errors.
///
/// Defines every error that can occur while turning tokens into an
/// expression tree: malformed prefix forms, unbalanced parentheses, unknown
/// operator symbols, malformed numeric literals and empty input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a finished tree.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The category of a failure, independent of where it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input does not follow the chosen grammar.
    Syntax,
    /// An operator symbol outside of `+ - * /`.
    UnsupportedOperator,
    /// A token in number position could not be read as a number.
    MalformedLiteral,
    /// The input contained no tokens.
    EmptyInput,
    /// A divisor evaluated to exactly zero.
    DivisionByZero,
}

impl ErrorKind {
    /// Short kebab-case name of the kind, e.g. `division-by-zero`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::UnsupportedOperator => "unsupported-operator",
            Self::MalformedLiteral => "malformed-literal",
            Self::EmptyInput => "empty-input",
            Self::DivisionByZero => "division-by-zero",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any failure produced while evaluating a line of input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the category of the wrapped error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}
