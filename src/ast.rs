use std::fmt;

use crate::interpreter::lexer::Token;

/// One of the four arithmetic operators understood by both grammars.
///
/// The same operator kind backs binary nodes built from infix input and
/// variadic nodes built from prefix input; only the node shape differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Maps an operator token to its operator kind.
    ///
    /// Returns `None` for numbers and parentheses.
    ///
    /// # Example
    /// ```
    /// use dualcalc::{ast::Operator, interpreter::lexer::Token};
    ///
    /// assert_eq!(Operator::from_token(&Token::Star), Some(Operator::Mul));
    /// assert_eq!(Operator::from_token(&Token::LParen), None);
    /// ```
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            _ => None,
        }
    }

    /// Binding strength used by the infix grammar.
    ///
    /// `+` and `-` bind with priority 1, `*` and `/` with priority 2. All
    /// operators are left-associative.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of the expression tree.
///
/// Every operation node owns its children exclusively, so a parsed
/// expression is always a strict tree that is dropped as a unit. Trees are
/// never mutated after the parser hands them out.
///
/// Operation nodes remember the byte offset of their operator token so that
/// evaluation errors can point back into the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric leaf.
    Literal {
        /// The parsed value.
        value: f64,
    },
    /// A two-operand operation produced by the infix grammar.
    BinaryOp {
        /// The operator.
        op:       Operator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// An operation over one or more operands produced by the prefix grammar.
    VariadicOp {
        /// The operator.
        op:       Operator,
        /// Operands in source order. The parser never produces an empty list.
        operands: Vec<Self>,
        /// Byte offset of the operator in the source.
        position: usize,
    },
}

impl Expr {
    /// Creates a literal leaf.
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self::Literal { value }
    }

    /// Creates a binary operation node that owns both operands.
    #[must_use]
    pub fn binary(op: Operator, left: Self, right: Self, position: usize) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right),
                         position }
    }
}

/// Renders the tree in prefix (Lisp) notation.
///
/// Binary and variadic nodes render the same way, so the output of an infix
/// expression can be fed back through the prefix grammar.
///
/// # Example
/// ```
/// let tree = dualcalc::parse("1 + 2 * 3").unwrap();
/// assert_eq!(tree.to_string(), "(+ 1 (* 2 3))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::BinaryOp { op, left, right, .. } => write!(f, "({op} {left} {right})"),
            Self::VariadicOp { op, operands, .. } => {
                write!(f, "({op}")?;
                for operand in operands {
                    write!(f, " {operand}")?;
                }
                write!(f, ")")
            },
        }
    }
}
