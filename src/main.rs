//! # sudoku-sat
//!
//! Command-line Sudoku solver. Reads a puzzle file (first line: board size N,
//! then N rows of N whitespace-separated values, 0 for empty), reduces it to
//! a CNF formula, hands the formula to the `splr` SAT backend, and prints the
//! decoded solution.
//!
//! ```sh
//! sudoku-sat [PUZZLE_FILE] [--timeout SECS] [--export-dimacs]
//! ```
//!
//! Without a file argument a bundled 9×9 sample is solved. The exit code is
//! non-zero when the puzzle is unsolvable, the search times out, or anything
//! fails to load.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use sudoku_sat::error::PuzzleError;
use sudoku_sat::sudoku::board::Sudoku;
use sudoku_sat::sudoku::encode::encode;
use sudoku_sat::sudoku::parse;
use sudoku_sat::sudoku::solver::{self, DEFAULT_TIMEOUT_SECS, SolveOutcome};

/// A bundled sample puzzle, solved when no file is given.
const DEFAULT_PUZZLE: &str = include_str!("../puzzles/easy.txt");

/// Command-line interface definition.
#[derive(Parser, Debug)]
#[command(name = "sudoku-sat", version, about = "A SAT-backed Sudoku solver")]
struct Cli {
    /// Path to a puzzle file. A bundled 9x9 sample is solved when omitted.
    path: Option<PathBuf>,

    /// Give up on the SAT search after this many seconds.
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: f64,

    /// Write the generated formula in DIMACS CNF format next to the puzzle
    /// file (or to stdout for the bundled sample) before solving.
    #[arg(short, long, default_value_t = false)]
    export_dimacs: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let puzzle = match load_puzzle(cli.path.as_deref()) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Error loading puzzle: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Input puzzle:\n{puzzle}");

    if cli.export_dimacs {
        if let Err(e) = export_dimacs(&puzzle, cli.path.as_deref()) {
            eprintln!("Error exporting DIMACS: {e}");
            return ExitCode::FAILURE;
        }
    }

    match solver::solve(&puzzle, cli.timeout) {
        Ok(SolveOutcome::Solved(solution)) => {
            if !solution.is_solved() {
                // The full-grid validator is the end-to-end sanity check on
                // the decoded model; failing it means an encoder defect.
                eprintln!("Internal error: decoded solution failed validation");
                return ExitCode::FAILURE;
            }
            println!("Solution found:\n{solution}");
            ExitCode::SUCCESS
        }
        Ok(SolveOutcome::Unsolvable) => {
            eprintln!("No solution exists for the given puzzle.");
            ExitCode::FAILURE
        }
        Ok(SolveOutcome::TimedOut) => {
            eprintln!(
                "Solving did not complete within {} seconds; the puzzle may still be solvable.",
                cli.timeout
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error while solving: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the puzzle from `path`, or the bundled sample when absent.
fn load_puzzle(path: Option<&std::path::Path>) -> Result<Sudoku, PuzzleError> {
    match path {
        Some(path) => parse::parse_file(path),
        None => parse::parse_str(DEFAULT_PUZZLE),
    }
}

/// Renders the puzzle's CNF and writes it to `<puzzle path>.cnf`, or prints
/// it when solving the bundled sample.
fn export_dimacs(puzzle: &Sudoku, path: Option<&std::path::Path>) -> std::io::Result<()> {
    let dimacs = encode(puzzle).to_string();
    match path {
        Some(path) => {
            let mut out = path.as_os_str().to_owned();
            out.push(".cnf");
            std::fs::write(&out, dimacs)?;
            println!("DIMACS written to {}", PathBuf::from(out).display());
        }
        None => print!("{dimacs}"),
    }
    Ok(())
}
