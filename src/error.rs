/// Input parsing errors.
///
/// Defines all error types that can occur while reading puzzle input files.
/// Parse errors include unexpected characters, unbalanced parentheses, and
/// malformed records such as password policies or boarding passes.
pub mod parse_error;
/// Puzzle solving errors.
///
/// Contains all error types that can be raised once an input file has been
/// read successfully. Solve errors include missing answers (no pair of
/// entries with the required sum, no vacant seat) and arithmetic overflow.
pub mod solve_error;

pub use parse_error::ParseError;
pub use solve_error::SolveError;

/// Result type used by all public puzzle operations.
pub type PuzzleResult<T> = Result<T, PuzzleError>;

#[derive(Debug)]
/// Represents any failure while solving a puzzle.
///
/// Every public operation in this crate returns this type, so callers handle
/// one error regardless of whether the input file could not be read, could
/// not be parsed, or simply holds no answer.
pub enum PuzzleError {
    /// The input file could not be read.
    Io(std::io::Error),
    /// The input file is malformed.
    Parse(ParseError),
    /// The puzzle has no answer for this input, or computing it failed.
    Solve(SolveError),
}

impl std::fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read the input file: {e}."),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Solve(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Solve(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseError> for PuzzleError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<SolveError> for PuzzleError {
    fn from(e: SolveError) -> Self {
        Self::Solve(e)
    }
}
