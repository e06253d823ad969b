#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur after input has been parsed.
pub enum SolveError {
    /// No solution exists for the requested day and part.
    UnknownPuzzle {
        /// The requested day number.
        day:   u8,
        /// Whether the bonus part was requested.
        bonus: bool,
    },
    /// No two entries of the expense report sum to the target.
    NoMatchingPair {
        /// The required sum.
        target: i64,
    },
    /// No three entries of the expense report sum to the target.
    NoMatchingTriple {
        /// The required sum.
        target: i64,
    },
    /// No vacant seat with occupied neighbours was found.
    NoVacantSeat,
    /// The input file holds no records to solve with.
    EmptyInput,
    /// Arithmetic operation overflowed.
    Overflow {
        /// The input line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPuzzle { day, bonus } => {
                let part = if *bonus { "bonus part" } else { "first part" };
                write!(f, "No solution is implemented for the {part} of day {day}.")
            },

            Self::NoMatchingPair { target } => {
                write!(f, "No two entries sum to {target}.")
            },

            Self::NoMatchingTriple { target } => {
                write!(f, "No three entries sum to {target}.")
            },

            Self::NoVacantSeat => {
                write!(f, "No vacant seat with occupied neighbours was found.")
            },

            Self::EmptyInput => write!(f, "The input file holds no records."),

            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for SolveError {}
