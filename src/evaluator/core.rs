use logos::Logos;

use crate::{
    error::{ParseError, PuzzleResult, SolveError},
    evaluator::lexer::Token,
};

/// A pending binary operator, waiting for its right-hand operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition.
    Add,
    /// Multiplication.
    Mul,
}

impl Operator {
    /// Applies the operator to two operands using checked arithmetic.
    fn apply(self, left: i64, right: i64, line: usize) -> Result<i64, SolveError> {
        let result = match self {
            Self::Add => left.checked_add(right),
            Self::Mul => left.checked_mul(right),
        };

        result.ok_or(SolveError::Overflow { line })
    }
}

/// A suspended evaluation context, saved when entering a parenthesized group.
///
/// The frame records the enclosing expression's running value and the
/// operator that will combine it with the group's result once the matching
/// `)` is reached. Frames live on an explicit stack whose depth always
/// equals the current parenthesis nesting depth.
#[derive(Debug)]
struct Frame {
    /// Running value of the enclosing expression when `(` was read.
    value:    i64,
    /// Operator that combines `value` with the group's result.
    operator: Operator,
}

/// Evaluates one homework expression and returns its value.
///
/// Evaluation proceeds strictly left to right: `+` and `*` share the same
/// precedence, and a parenthesized group is evaluated as an independent unit
/// whose result substitutes for the group. Spaces and tabs between tokens
/// are ignored.
///
/// # Parameters
/// - `expression`: The expression text, without its trailing newline.
/// - `line`: 1-based input line number, used in error reports.
///
/// # Errors
/// Returns a `ParseError` for unrecognized characters, digit runs too large
/// for an `i64`, and unbalanced parentheses, and `SolveError::Overflow` if
/// an intermediate result does not fit an `i64`.
///
/// # Example
/// ```
/// use advent2020::evaluator::core::eval_expression;
///
/// assert_eq!(eval_expression("1+2*3+4*5", 1).unwrap(), 95);
/// assert_eq!(eval_expression("2 * (3 + 4)", 1).unwrap(), 14);
/// ```
pub fn eval_expression(expression: &str, line: usize) -> PuzzleResult<i64> {
    let mut lexer = Token::lexer(expression);
    let mut value = 0_i64;
    let mut operator = Operator::Add;
    let mut stack: Vec<Frame> = Vec::new();

    while let Some(token) = lexer.next() {
        let Ok(token) = token else {
            let slice = lexer.slice();
            if slice.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::LiteralTooLarge { line }.into());
            }
            return Err(ParseError::UnexpectedToken { token: slice.to_string(), line }.into());
        };

        match token {
            Token::Number(n) => value = operator.apply(value, n, line)?,
            Token::Plus => operator = Operator::Add,
            Token::Star => operator = Operator::Mul,
            Token::LParen => {
                stack.push(Frame { value, operator });
                value = 0;
                operator = Operator::Add;
            },
            Token::RParen => {
                let frame = stack.pop()
                                 .ok_or(ParseError::UnexpectedClosingParen { line })?;
                // The operator left pending inside the group stays pending;
                // well-formed input always supplies a new operator before the
                // next operand.
                value = frame.operator.apply(frame.value, value, line)?;
            },
            Token::Ignored => {},
        }
    }

    if stack.is_empty() {
        Ok(value)
    } else {
        Err(ParseError::ExpectedClosingParen { line }.into())
    }
}
