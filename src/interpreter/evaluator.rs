/// Core evaluation logic.
///
/// Defines the evaluation result type and walks the tree, dispatching on the
/// node variant.
pub mod core;

/// Arithmetic on evaluated operands.
///
/// Applies an operator to two values for binary nodes and folds operand
/// lists for variadic nodes. Division by exactly zero is rejected here.
pub mod arithmetic;
