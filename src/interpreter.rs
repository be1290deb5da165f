/// The evaluator module computes the value of a finished tree.
///
/// # Responsibilities
/// - Walks literal, binary and variadic nodes.
/// - Applies the four arithmetic operators and folds operand lists.
/// - Reports division by exactly zero.
pub mod evaluator;
/// The lexer module tokenizes a line of input.
///
/// The lexer splits raw text into numbers, operator symbols and
/// parentheses, each tagged with its byte offset. It performs no validation
/// of numbers; malformed literals surface in the parser.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// # Responsibilities
/// - Chooses between the infix and the prefix grammar.
/// - Converts infix input through postfix order into binary nodes.
/// - Parses prefix forms by recursive descent into variadic nodes.
/// - Reports syntax errors with the offending token and its position.
pub mod parser;
