use std::{fs, path::Path};

use crate::error::{ParseError, PuzzleResult};

/// One `lo-hi letter: password` record from the password file.
#[derive(Debug)]
struct PolicyLine {
    lo:       usize,
    hi:       usize,
    letter:   char,
    password: String,
}

/// Parses one password policy record.
///
/// The expected shape is `lo-hi letter: password`, for example
/// `1-3 a: abcde`. Anything else is reported as a malformed policy with the
/// offending line number.
fn parse_policy(text: &str, line: usize) -> Result<PolicyLine, ParseError> {
    let malformed = || ParseError::MalformedPolicy { line };

    let (rule, password) = text.split_once(": ").ok_or_else(malformed)?;
    let (range, letter) = rule.split_once(' ').ok_or_else(malformed)?;
    let (lo, hi) = range.split_once('-').ok_or_else(malformed)?;

    let mut letters = letter.chars();
    let letter = letters.next().ok_or_else(malformed)?;
    if letters.next().is_some() {
        return Err(malformed());
    }

    Ok(PolicyLine { lo: lo.parse().map_err(|_| malformed())?,
                    hi: hi.parse().map_err(|_| malformed())?,
                    letter,
                    password: password.to_string(), })
}

/// Counts the passwords whose letter occurs between `lo` and `hi` times.
///
/// # Errors
/// Returns a `ParseError` for records that do not match the policy format.
pub fn count_valid_by_count(path: &Path) -> PuzzleResult<i64> {
    let content = fs::read_to_string(path)?;
    let mut valid = 0;

    for (i, text) in content.lines().enumerate() {
        let policy = parse_policy(text, i + 1)?;
        let occurrences = policy.password.chars().filter(|&c| c == policy.letter).count();
        if (policy.lo..=policy.hi).contains(&occurrences) {
            valid += 1;
        }
    }

    Ok(valid)
}

/// Counts the passwords where exactly one of the positions `lo` and `hi`
/// (1-based) holds the policy letter.
///
/// # Errors
/// Returns a `ParseError` for records that do not match the policy format.
pub fn count_valid_by_position(path: &Path) -> PuzzleResult<i64> {
    let content = fs::read_to_string(path)?;
    let mut valid = 0;

    for (i, text) in content.lines().enumerate() {
        let policy = parse_policy(text, i + 1)?;
        let chars: Vec<char> = policy.password.chars().collect();
        let matches_at = |pos: usize| pos >= 1 && chars.get(pos - 1) == Some(&policy.letter);

        if matches_at(policy.lo) != matches_at(policy.hi) {
            valid += 1;
        }
    }

    Ok(valid)
}
