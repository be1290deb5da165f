/// Grammar selection and the shared parse result type.
///
/// Looks at the start of the token stream, decides between the infix and
/// the prefix grammar, and hands the tokens to the matching parser.
pub mod core;

/// Infix parsing.
///
/// Converts infix tokens to postfix order with the shunting-yard algorithm
/// and reduces the postfix sequence into a tree of binary nodes.
pub mod infix;

/// Prefix (Lisp) parsing.
///
/// Recursive descent over `(op operand+)` forms, producing variadic nodes.
pub mod prefix;

/// Numeric literal handling shared by both grammars.
pub mod literal;
