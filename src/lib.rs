//! # advent2020
//!
//! Solutions to the Advent of Code 2020 coding puzzles, one independent
//! module per day. Each solution is a pure transformation from a small text
//! file to a numeric answer; the day-18 homework evaluator is the one piece
//! with real machinery, a left-to-right expression evaluator with an
//! explicit frame stack for parenthesized groups.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::path::Path;

use crate::{
    error::{PuzzleResult, SolveError},
    solutions::{boarding, expense, homework, passport, password},
};

/// Provides unified error types for reading, parsing and solving.
///
/// This module defines all errors that can be raised while answering a
/// puzzle. It standardizes error reporting and carries detailed information
/// about failures, including input line numbers where they exist.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (I/O, parsing, solving).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Evaluates left-to-right arithmetic expressions.
///
/// This module implements the core of the day-18 solution: a lexer for the
/// expression grammar and an evaluator in which `+` and `*` share the same
/// precedence and parenthesized groups are handled with an explicit stack
/// of suspended evaluation frames.
///
/// # Responsibilities
/// - Tokenizes expression text into numbers, operators and parentheses.
/// - Evaluates token streams strictly left to right.
/// - Reports malformed expressions and arithmetic overflow.
pub mod evaluator;
/// Contains one independent solution module per puzzle day.
///
/// Every solution reads its input file once, applies puzzle-specific
/// parsing and logic, and returns a scalar answer. No state is shared
/// between days.
pub mod solutions;

/// Solves one puzzle and returns its numeric answer.
///
/// Dispatches to the solution for the given day, using the first or the
/// bonus part of the puzzle as requested. The expense-report target for
/// day 1 is the puzzle's fixed value,
/// [`TARGET_SUM`](solutions::expense::TARGET_SUM).
///
/// # Errors
/// Returns an error if the input file cannot be read, if it is malformed,
/// if the puzzle has no answer for this input, or if no solution is
/// implemented for the requested day and part.
///
/// # Examples
/// ```
/// use std::path::Path;
///
/// // The day-18 sample homework sums to 26457.
/// let total = advent2020::solve(18, false, Path::new("data/day18.txt")).unwrap();
/// assert_eq!(total, 26457);
///
/// // Days without an implemented solution are reported as errors.
/// assert!(advent2020::solve(3, false, Path::new("data/day18.txt")).is_err());
/// ```
pub fn solve(day: u8, bonus: bool, input: &Path) -> PuzzleResult<i64> {
    match (day, bonus) {
        (1, false) => expense::pair_product(input, expense::TARGET_SUM),
        (1, true) => expense::triple_product(input, expense::TARGET_SUM),
        (2, false) => password::count_valid_by_count(input),
        (2, true) => password::count_valid_by_position(input),
        (4, false) => passport::count_complete(input),
        (4, true) => passport::count_valid(input),
        (5, false) => boarding::highest_seat_id(input),
        (5, true) => boarding::vacant_seat_id(input),
        (18, false) => homework::sum_of_results(input),
        _ => Err(SolveError::UnknownPuzzle { day, bonus }.into()),
    }
}
