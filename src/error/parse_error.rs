#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while parsing puzzle input.
pub enum ParseError {
    /// Found an unexpected token while reading an expression.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The input line where the error occurred.
        line:  usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The input line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` appeared without a matching `(`.
    UnexpectedClosingParen {
        /// The input line where the error occurred.
        line: usize,
    },
    /// A numeric literal was too large to be represented safely.
    LiteralTooLarge {
        /// The input line where the error occurred.
        line: usize,
    },
    /// A token could not be parsed as a number.
    InvalidNumber {
        /// The offending token.
        token: String,
        /// The input line where the error occurred.
        line:  usize,
    },
    /// A password policy record did not match the expected format.
    MalformedPolicy {
        /// The input line where the error occurred.
        line: usize,
    },
    /// A passport field was not a `key:value` pair.
    MalformedField {
        /// The offending field.
        token: String,
        /// The input line where the error occurred.
        line:  usize,
    },
    /// A boarding pass was not ten characters of `F`, `B`, `L` and `R`.
    MalformedBoardingPass {
        /// The offending sequence.
        token: String,
        /// The input line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedClosingParen { line } => write!(f,
                                                            "Error on line {line}: Unexpected closing parenthesis ')'."),

            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },

            Self::InvalidNumber { token, line } => {
                write!(f, "Error on line {line}: Cannot parse '{token}' as a number.")
            },

            Self::MalformedPolicy { line } => write!(f,
                                                     "Error on line {line}: Malformed password policy. Example: 1-3 a: abcde"),

            Self::MalformedField { token, line } => write!(f,
                                                           "Error on line {line}: Malformed passport field '{token}'. Example: byr:1937"),

            Self::MalformedBoardingPass { token, line } => write!(f,
                                                                  "Error on line {line}: Malformed boarding pass '{token}'. Expected ten of 'F', 'B', 'L' and 'R'."),
        }
    }
}

impl std::error::Error for ParseError {}
