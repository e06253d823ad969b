use logos::Logos;

/// Represents a lexical token in a homework expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression grammar.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `7` or `24`.
    #[regex(r"[0-9]+", parse_number)]
    Number(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `*`
    #[token("*")]
    Star,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed value if it fits an `i64`.
/// - `None`: If the digit run is too large to represent.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
