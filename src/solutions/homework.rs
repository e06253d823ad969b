use std::{fs, path::Path};

use crate::{
    error::{PuzzleResult, SolveError},
    evaluator::core::eval_expression,
};

/// Evaluates every expression in the homework file and sums the results.
///
/// Each line is one expression, evaluated independently and in input order
/// under the left-to-right rules of
/// [`eval_expression`](crate::evaluator::core::eval_expression). The
/// per-line results are added with checked arithmetic.
///
/// # Errors
/// Returns a `ParseError` for malformed expressions and
/// `SolveError::Overflow` if a line result or the running total does not
/// fit an `i64`.
///
/// # Example
/// ```
/// use std::path::Path;
///
/// use advent2020::solutions::homework::sum_of_results;
///
/// let total = sum_of_results(Path::new("data/day18.txt")).unwrap();
/// assert_eq!(total, 26457);
/// ```
pub fn sum_of_results(path: &Path) -> PuzzleResult<i64> {
    let content = fs::read_to_string(path)?;
    let mut total = 0_i64;

    for (i, expression) in content.lines().enumerate() {
        let line = i + 1;
        let result = eval_expression(expression, line)?;
        total = total.checked_add(result).ok_or(SolveError::Overflow { line })?;
    }

    Ok(total)
}
