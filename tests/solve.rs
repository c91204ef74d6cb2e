//! End-to-end tests: load the bundled puzzles, run the full
//! encode → solve → decode pipeline, and validate the results with the
//! independent full-grid checker.

use std::path::PathBuf;
use sudoku_sat::sudoku::board::Sudoku;
use sudoku_sat::sudoku::parse;
use sudoku_sat::sudoku::solver::{DEFAULT_TIMEOUT_SECS, SolveOutcome, solve};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("puzzles")
        .join(name)
}

fn solve_fixture(name: &str) -> (Sudoku, Sudoku) {
    let puzzle = parse::parse_file(fixture(name)).unwrap();
    match solve(&puzzle, DEFAULT_TIMEOUT_SECS).unwrap() {
        SolveOutcome::Solved(solution) => (puzzle, solution),
        other => panic!("{name} should be solvable, got {other:?}"),
    }
}

/// Every clue of `puzzle` appears unchanged in `solution`.
fn clues_preserved(puzzle: &Sudoku, solution: &Sudoku) -> bool {
    let n = puzzle.size().get();
    (0..n)
        .flat_map(|row| (0..n).map(move |col| (row, col)))
        .filter(|&(row, col)| puzzle.value(row, col) != 0)
        .all(|(row, col)| solution.value(row, col) == puzzle.value(row, col))
}

#[test]
fn solves_the_bundled_4x4() {
    let (puzzle, solution) = solve_fixture("4x4.txt");
    assert!(solution.is_solved());
    assert!(clues_preserved(&puzzle, &solution));
}

#[test]
fn solves_the_bundled_easy_9x9() {
    let (puzzle, solution) = solve_fixture("easy.txt");
    assert!(solution.is_solved());
    assert!(clues_preserved(&puzzle, &solution));
}

#[test]
fn solves_the_sparse_evil_9x9_within_the_timeout() {
    let (puzzle, solution) = solve_fixture("evil.txt");
    assert!(solution.is_solved());
    assert!(clues_preserved(&puzzle, &solution));
}

#[test]
fn a_valid_solution_encoded_as_clues_is_satisfiable() {
    // Completeness: a solved grid is, trivially, a model of its own encoding.
    let (_, solution) = solve_fixture("easy.txt");
    match solve(&solution, DEFAULT_TIMEOUT_SECS).unwrap() {
        SolveOutcome::Solved(again) => assert_eq!(again, solution),
        other => panic!("expected the solution to round-trip, got {other:?}"),
    }
}

#[test]
fn duplicate_clues_in_a_row_are_unsatisfiable() {
    let puzzle = Sudoku::new(vec![
        vec![1, 1, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ])
    .unwrap();
    assert_eq!(
        solve(&puzzle, DEFAULT_TIMEOUT_SECS).unwrap(),
        SolveOutcome::Unsolvable
    );
}
