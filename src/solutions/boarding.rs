use std::{fs, path::Path};

use itertools::Itertools;

use crate::error::{ParseError, PuzzleResult, SolveError};

/// Decodes one boarding pass into its seat id.
///
/// The first seven characters binary-encode the row (`B` = 1, `F` = 0), the
/// last three the column (`R` = 1, `L` = 0); the seat id is
/// `row * 8 + column`.
fn decode_seat(sequence: &str, line: usize) -> Result<i64, ParseError> {
    let malformed = || ParseError::MalformedBoardingPass { token: sequence.to_string(),
                                                           line };

    let bytes = sequence.as_bytes();
    if bytes.len() != 10 {
        return Err(malformed());
    }

    let (row_part, col_part) = bytes.split_at(7);

    let mut row = 0;
    for &b in row_part {
        row = row * 2
              + match b {
                  b'B' => 1,
                  b'F' => 0,
                  _ => return Err(malformed()),
              };
    }

    let mut column = 0;
    for &b in col_part {
        column = column * 2
                 + match b {
                     b'R' => 1,
                     b'L' => 0,
                     _ => return Err(malformed()),
                 };
    }

    Ok(row * 8 + column)
}

/// Decodes every boarding pass in the file into seat ids, in input order.
///
/// # Errors
/// Returns a `ParseError` for sequences that are not ten characters of
/// `F`, `B`, `L` and `R`.
pub fn seat_ids(path: &Path) -> PuzzleResult<Vec<i64>> {
    let content = fs::read_to_string(path)?;
    let mut ids = Vec::new();

    for (i, sequence) in content.lines().enumerate() {
        ids.push(decode_seat(sequence, i + 1)?);
    }

    Ok(ids)
}

/// Returns the highest seat id on any boarding pass in the file.
///
/// # Errors
/// Returns `SolveError::EmptyInput` when the file holds no passes.
pub fn highest_seat_id(path: &Path) -> PuzzleResult<i64> {
    let ids = seat_ids(path)?;

    ids.into_iter().max().ok_or_else(|| SolveError::EmptyInput.into())
}

/// Finds the one vacant seat whose neighbouring ids are both occupied.
///
/// The occupied ids are sorted and scanned for the single gap of exactly
/// one seat; ids missing at the very front and back of the plane never
/// form such a gap.
///
/// # Errors
/// Returns `SolveError::NoVacantSeat` when no two occupied ids are exactly
/// two apart.
pub fn vacant_seat_id(path: &Path) -> PuzzleResult<i64> {
    let mut ids = seat_ids(path)?;
    ids.sort_unstable();

    ids.iter()
       .tuple_windows()
       .find(|&(a, b)| b - a == 2)
       .map(|(a, _)| a + 1)
       .ok_or_else(|| SolveError::NoVacantSeat.into())
}
