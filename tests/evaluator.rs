use advent2020::{
    error::{ParseError, PuzzleError, SolveError},
    evaluator::core::eval_expression,
};

fn assert_evaluates(expression: &str, expected: i64) {
    match eval_expression(expression, 1) {
        Ok(value) => {
            assert_eq!(value, expected, "{expression} evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("{expression} failed to evaluate: {e}"),
    }
}

fn assert_rejects(expression: &str) -> PuzzleError {
    match eval_expression(expression, 1) {
        Ok(value) => panic!("{expression} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn addition_only_sums_operands() {
    assert_evaluates("1+2+3", 6);
    assert_evaluates("0+9", 9);
    assert_evaluates("7", 7);
}

#[test]
fn multiplication_only_multiplies_operands() {
    assert_evaluates("2*3*4", 24);
    assert_evaluates("9*9", 81);
}

#[test]
fn operators_share_precedence_left_to_right() {
    assert_evaluates("1+2*3+4*5", 95);
    assert_evaluates("2*3+4", 10);
    assert_evaluates("1 + 2 * 3 + 4 * 5 + 6", 71);
}

#[test]
fn parenthesized_group_evaluates_as_a_unit() {
    assert_evaluates("2*(3+4)", 14);
    assert_evaluates("(1+2)*(3+4)", 21);
    assert_evaluates("(2+3)*4", 20);
}

#[test]
fn nested_parentheses() {
    assert_evaluates("((2+4)*((6+5)*8))", 528);
    assert_evaluates("5+(8*3+9+3*4*3)", 437);
    assert_evaluates("5 * 9 * (7 * 3 * 3 + 9 * 3 + (8 + 6 * 4))", 12240);
}

#[test]
fn multi_digit_operands_are_single_numbers() {
    assert_evaluates("12", 12);
    assert_evaluates("10+2*3", 36);
    assert_evaluates("100*2+5", 205);
}

#[test]
fn evaluation_is_idempotent() {
    let expression = "((2+4)*((6+5)*8))";
    let first = eval_expression(expression, 1).unwrap();
    let second = eval_expression(expression, 1).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_closing_paren_is_rejected() {
    let e = assert_rejects("(1+2");
    assert!(matches!(e, PuzzleError::Parse(ParseError::ExpectedClosingParen { .. })),
            "unexpected error: {e}");
}

#[test]
fn stray_closing_paren_is_rejected() {
    let e = assert_rejects("1+2)");
    assert!(matches!(e, PuzzleError::Parse(ParseError::UnexpectedClosingParen { .. })),
            "unexpected error: {e}");
}

#[test]
fn unsupported_characters_are_rejected() {
    assert_rejects("1&2");
    assert_rejects("1-2");
    assert_rejects("two*3");
}

#[test]
fn errors_carry_the_input_line_number() {
    match eval_expression("1&2", 7) {
        Err(PuzzleError::Parse(e)) => {
            assert_eq!(e, ParseError::UnexpectedToken { token: "&".to_string(), line: 7 });
        },
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn oversized_literals_are_rejected() {
    let e = assert_rejects("99999999999999999999");
    assert!(matches!(e, PuzzleError::Parse(ParseError::LiteralTooLarge { .. })),
            "unexpected error: {e}");
}

#[test]
fn overflowing_arithmetic_is_rejected() {
    let e = assert_rejects("9223372036854775807+1");
    assert!(matches!(e, PuzzleError::Solve(SolveError::Overflow { .. })),
            "unexpected error: {e}");
}
