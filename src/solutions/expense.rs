use std::{fs, path::Path};

use itertools::Itertools;

use crate::error::{ParseError, PuzzleResult, SolveError};

/// Sum the expense report entries must reach.
pub const TARGET_SUM: i64 = 2020;

/// Finds the two entries that sum to `target` and returns their product.
///
/// # Parameters
/// - `path`: Path to the expense report, whitespace-separated integers.
/// - `target`: The required sum, [`TARGET_SUM`] for the real puzzle.
///
/// # Errors
/// Returns `SolveError::NoMatchingPair` when no two entries reach the
/// target, and a `ParseError` for tokens that are not integers.
pub fn pair_product(path: &Path, target: i64) -> PuzzleResult<i64> {
    let entries = read_entries(path)?;

    entries.iter()
           .copied()
           .tuple_combinations()
           .find(|&(a, b)| a + b == target)
           .map(|(a, b)| a * b)
           .ok_or_else(|| SolveError::NoMatchingPair { target }.into())
}

/// Finds the three entries that sum to `target` and returns their product.
///
/// # Errors
/// Returns `SolveError::NoMatchingTriple` when no three entries reach the
/// target, and a `ParseError` for tokens that are not integers.
pub fn triple_product(path: &Path, target: i64) -> PuzzleResult<i64> {
    let entries = read_entries(path)?;

    entries.iter()
           .copied()
           .tuple_combinations()
           .find(|&(a, b, c)| a + b + c == target)
           .map(|(a, b, c)| a * b * c)
           .ok_or_else(|| SolveError::NoMatchingTriple { target }.into())
}

/// Reads the whitespace-separated entries of the expense report.
fn read_entries(path: &Path) -> PuzzleResult<Vec<i64>> {
    let content = fs::read_to_string(path)?;
    let mut entries = Vec::new();

    for (i, line) in content.lines().enumerate() {
        for token in line.split_whitespace() {
            let entry = token.parse()
                             .map_err(|_| ParseError::InvalidNumber { token: token.to_string(),
                                                                      line:  i + 1, })?;
            entries.push(entry);
        }
    }

    Ok(entries)
}
