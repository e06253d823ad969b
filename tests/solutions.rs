use std::path::Path;

use advent2020::{
    solutions::{boarding, homework},
    solve,
};
use walkdir::WalkDir;

fn assert_answer(day: u8, bonus: bool, expected: i64) {
    let input = format!("data/day{day}.txt");

    match solve(day, bonus, Path::new(&input)) {
        Ok(answer) => {
            assert_eq!(answer, expected, "wrong answer for day {day} (bonus: {bonus})");
        },
        Err(e) => panic!("day {day} (bonus: {bonus}) failed: {e}"),
    }
}

#[test]
fn expense_report_pair() {
    assert_answer(1, false, 514_579);
}

#[test]
fn expense_report_triple() {
    assert_answer(1, true, 241_861_950);
}

#[test]
fn password_occurrence_count() {
    assert_answer(2, false, 2);
}

#[test]
fn password_position_match() {
    assert_answer(2, true, 1);
}

#[test]
fn passport_required_fields() {
    assert_answer(4, false, 2);
}

#[test]
fn passport_validated_fields() {
    assert_answer(4, true, 2);
}

#[test]
fn boarding_highest_seat() {
    assert_answer(5, false, 820);
}

#[test]
fn boarding_vacant_seat() {
    assert_answer(5, true, 91);
}

#[test]
fn homework_sum() {
    assert_answer(18, false, 26_457);
}

#[test]
fn homework_batch_sums_per_line_results() {
    let path = std::env::temp_dir().join("advent2020_homework_sample.txt");
    std::fs::write(&path, "1+2*3\n4*5\n").unwrap();

    let total = homework::sum_of_results(&path).unwrap();
    assert_eq!(total, 29);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn seat_ids_keep_input_order() {
    let ids = boarding::seat_ids(Path::new("data/day5.txt")).unwrap();

    assert_eq!(ids[0], 357);
    assert_eq!(ids[1], 567);
    assert_eq!(ids[2], 119);
    assert_eq!(ids[3], 820);
}

#[test]
fn unknown_puzzle_is_an_error() {
    assert!(solve(3, false, Path::new("data/day1.txt")).is_err());
    assert!(solve(18, true, Path::new("data/day18.txt")).is_err());
}

#[test]
fn missing_input_file_is_an_error() {
    assert!(solve(1, false, Path::new("data/no_such_file.txt")).is_err());
}

#[test]
fn sample_inputs_all_solve() {
    let mut count = 0;

    for entry in
        WalkDir::new("data").into_iter()
                            .filter_map(Result::ok)
                            .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        let Some(day) = name.strip_prefix("day").and_then(|d| d.parse::<u8>().ok()) else {
            continue;
        };

        // Day 18 has no bonus part here; every other sample has both.
        let parts: &[bool] = if day == 18 { &[false] } else { &[false, true] };
        for &bonus in parts {
            count += 1;
            if let Err(e) = solve(day, bonus, path) {
                panic!("day {day} (bonus: {bonus}) on {} failed: {e}", path.display());
            }
        }
    }

    assert!(count > 0, "No sample inputs found in data/");
}
