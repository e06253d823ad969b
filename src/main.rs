use std::path::PathBuf;

use clap::Parser;

/// advent2020 answers Advent of Code 2020 puzzles from their input files.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Day of the puzzle to solve (1, 2, 4, 5 or 18).
    #[arg(short, long)]
    day: u8,

    /// Solve the day's bonus part instead of the first part.
    #[arg(short, long)]
    bonus: bool,

    /// Path to the puzzle input file.
    input: PathBuf,
}

fn main() {
    let args = Args::parse();

    match advent2020::solve(args.day, args.bonus, &args.input) {
        Ok(answer) => println!("{answer}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
