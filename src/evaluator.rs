/// The core module evaluates tokenized expressions.
///
/// The evaluator walks the token stream left to right, folding each operand
/// into a running value under the pending operator and using an explicit
/// stack of frames to suspend and resume enclosing expressions around
/// parenthesized groups. It is the execution engine behind the day-18
/// solution.
///
/// # Responsibilities
/// - Evaluates expressions with equal-precedence `+` and `*`.
/// - Tracks parenthesis nesting with a last-in-first-out frame stack.
/// - Reports unbalanced parentheses and arithmetic overflow.
pub mod core;
/// The lexer module tokenizes homework expressions.
///
/// The lexer reads one line of raw expression text and produces a stream of
/// tokens: numbers, the two operators, and parentheses. This is the first
/// stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Folds digit runs into single numeric operands.
/// - Rejects characters that are not part of the expression grammar.
pub mod lexer;
