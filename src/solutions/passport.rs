use std::{collections::HashMap, fs, path::Path};

use crate::error::{ParseError, PuzzleResult};

/// Fields every passport must carry. `cid` is deliberately absent: North
/// Pole credentials lack it and still count.
pub const REQUIRED_FIELDS: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];

/// Eye colors accepted by the bonus validation rules.
const EYE_COLORS: [&str; 7] = ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"];

/// One passport record: a mapping from field keys to raw values.
#[derive(Debug, Default)]
struct Passport {
    fields: HashMap<String, String>,
}

impl Passport {
    /// True when all required fields are present.
    fn is_complete(&self) -> bool {
        REQUIRED_FIELDS.iter().all(|field| self.fields.contains_key(*field))
    }

    /// True when the passport is complete and every required field also
    /// passes its validation rule.
    fn is_valid(&self) -> bool {
        self.is_complete()
        && REQUIRED_FIELDS.iter()
                          .all(|field| field_is_valid(field, &self.fields[*field]))
    }
}

/// True when `value` parses as an integer within `lo..=hi`.
fn number_in_range(value: &str, lo: i64, hi: i64) -> bool {
    value.parse::<i64>().is_ok_and(|n| (lo..=hi).contains(&n))
}

/// Checks one required field against the bonus validation rules.
fn field_is_valid(field: &str, value: &str) -> bool {
    match field {
        "byr" => number_in_range(value, 1920, 2002),
        "iyr" => number_in_range(value, 2010, 2020),
        "eyr" => number_in_range(value, 2020, 2030),
        "hgt" => {
            if let Some(cm) = value.strip_suffix("cm") {
                number_in_range(cm, 150, 193)
            } else if let Some(inches) = value.strip_suffix("in") {
                number_in_range(inches, 59, 76)
            } else {
                false
            }
        },
        "hcl" => {
            value.len() == 7
            && value.starts_with('#')
            && value[1..].bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        },
        "ecl" => EYE_COLORS.contains(&value),
        "pid" => value.len() == 9 && value.bytes().all(|b| b.is_ascii_digit()),
        _ => true,
    }
}

/// Splits the batch file into passport records.
///
/// Records are separated by blank lines; fields within a record are
/// separated by spaces or newlines and must each be a `key:value` pair.
fn parse_batch(content: &str) -> Result<Vec<Passport>, ParseError> {
    let mut passports = Vec::new();
    let mut current = Passport::default();

    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            if !current.fields.is_empty() {
                passports.push(std::mem::take(&mut current));
            }
            continue;
        }

        for field in line.split_whitespace() {
            let (key, value) =
                field.split_once(':')
                     .ok_or_else(|| ParseError::MalformedField { token: field.to_string(),
                                                                 line:  i + 1, })?;
            current.fields.insert(key.to_string(), value.to_string());
        }
    }

    if !current.fields.is_empty() {
        passports.push(current);
    }

    Ok(passports)
}

/// Counts the passports that carry all required fields.
///
/// # Errors
/// Returns a `ParseError` for fields that are not `key:value` pairs.
pub fn count_complete(path: &Path) -> PuzzleResult<i64> {
    let content = fs::read_to_string(path)?;
    let passports = parse_batch(&content)?;

    Ok(passports.iter().filter(|p| p.is_complete()).count() as i64)
}

/// Counts the passports whose required fields are present and whose values
/// all pass the validation rules.
///
/// A value that merely fails validation makes the passport invalid; it does
/// not make the file malformed.
///
/// # Errors
/// Returns a `ParseError` for fields that are not `key:value` pairs.
pub fn count_valid(path: &Path) -> PuzzleResult<i64> {
    let content = fs::read_to_string(path)?;
    let passports = parse_batch(&content)?;

    Ok(passports.iter().filter(|p| p.is_valid()).count() as i64)
}
