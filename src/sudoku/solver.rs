//! The solve pipeline: encode the puzzle, feed the formula to a SAT backend,
//! run the search under a timeout, and decode the model back into a grid.

use crate::error::SolveError;
use crate::sat::backend::{SatBackend, SatOutcome};
use crate::sat::splr::SplrBackend;
use crate::sudoku::board::Sudoku;
use crate::sudoku::decode::decode_model;
use crate::sudoku::encode::encode;
use log::info;
use std::time::Instant;

/// Default solve timeout in seconds. Even sparse 25×25 instances finish well
/// under this; anything longer means the search is genuinely stuck.
pub const DEFAULT_TIMEOUT_SECS: f64 = 10.0;

/// The terminal outcomes of solving one puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A valid completion of the clues.
    Solved(Sudoku),
    /// The clues admit no completion. A normal outcome, not an error.
    Unsolvable,
    /// The search did not finish within the timeout. Reported distinctly:
    /// an incomplete search says nothing about solvability.
    TimedOut,
}

/// Solves `puzzle` through the given backend.
///
/// The whole pipeline is one synchronous pass with no shared state between
/// puzzles; only the backend's `solve` call can block, and it is bounded by
/// `timeout_secs`.
///
/// # Errors
///
/// Returns a [`SolveError`] if clause construction hits a contradiction
/// (an encoder bug, never a puzzle property) or the backend fails.
pub fn solve_with<B: SatBackend>(
    puzzle: &Sudoku,
    backend: &mut B,
    timeout_secs: f64,
) -> Result<SolveOutcome, SolveError> {
    let formula = encode(puzzle);

    backend.declare_variables(formula.num_vars());
    for clause in formula.clauses() {
        backend.add_clause(clause)?;
    }

    let start = Instant::now();
    let outcome = backend.solve(timeout_secs)?;
    info!(
        "solved {} clauses over {} vars in {:.3}s",
        formula.len(),
        formula.num_vars(),
        start.elapsed().as_secs_f64(),
    );

    match outcome {
        SatOutcome::Satisfiable(model) => {
            Ok(SolveOutcome::Solved(decode_model(puzzle.size(), &model)?))
        }
        SatOutcome::Unsatisfiable => Ok(SolveOutcome::Unsolvable),
        SatOutcome::TimedOut => Ok(SolveOutcome::TimedOut),
    }
}

/// Solves `puzzle` with the bundled `splr` backend.
///
/// # Errors
///
/// See [`solve_with`].
pub fn solve(puzzle: &Sudoku, timeout_secs: f64) -> Result<SolveOutcome, SolveError> {
    solve_with(puzzle, &mut SplrBackend::new(), timeout_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(rows: &[&[usize]]) -> Sudoku {
        Sudoku::new(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
    }

    #[test]
    fn solves_the_4x4_scenario() {
        let given = puzzle(&[
            &[0, 0, 0, 4],
            &[0, 0, 0, 0],
            &[2, 0, 0, 3],
            &[4, 0, 1, 2],
        ]);

        let SolveOutcome::Solved(solution) = solve(&given, DEFAULT_TIMEOUT_SECS).unwrap() else {
            panic!("scenario puzzle must be solvable");
        };

        assert!(solution.is_solved());
        // Clues stay fixed.
        assert_eq!(solution.value(0, 3), 4);
        assert_eq!(solution.value(2, 0), 2);
        assert_eq!(solution.value(2, 3), 3);
        assert_eq!(solution.value(3, 0), 4);
        assert_eq!(solution.value(3, 2), 1);
        assert_eq!(solution.value(3, 3), 2);
    }

    #[test]
    fn conflicting_clues_are_unsolvable_not_an_error() {
        let given = puzzle(&[
            &[1, 1, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]);
        assert_eq!(
            solve(&given, DEFAULT_TIMEOUT_SECS).unwrap(),
            SolveOutcome::Unsolvable
        );
    }

    #[test]
    fn solved_grid_round_trips_to_itself() {
        let given = puzzle(&[
            &[1, 2, 3, 4],
            &[3, 4, 1, 2],
            &[2, 1, 4, 3],
            &[4, 3, 2, 1],
        ]);

        let SolveOutcome::Solved(solution) = solve(&given, DEFAULT_TIMEOUT_SECS).unwrap() else {
            panic!("a valid solution encoded as clues must be satisfiable");
        };
        assert_eq!(solution, given);
    }

    /// A canned backend for exercising the pipeline without a real search.
    struct FixedOutcome(SatOutcome);

    impl SatBackend for FixedOutcome {
        fn declare_variables(&mut self, _count: usize) {}

        fn add_clause(&mut self, _literals: &[i32]) -> Result<(), SolveError> {
            Ok(())
        }

        fn solve(&mut self, _timeout_secs: f64) -> Result<SatOutcome, SolveError> {
            Ok(self.0.clone())
        }
    }

    fn empty_four() -> Sudoku {
        Sudoku::new(vec![vec![0; 4]; 4]).unwrap()
    }

    #[test]
    fn timeout_propagates_distinctly() {
        let given = empty_four();
        let outcome =
            solve_with(&given, &mut FixedOutcome(SatOutcome::TimedOut), 0.001).unwrap();
        assert_eq!(outcome, SolveOutcome::TimedOut);
    }

    #[test]
    fn out_of_range_model_literal_is_fatal() {
        let given = empty_four();
        let mut backend = FixedOutcome(SatOutcome::Satisfiable(vec![65]));
        let err = solve_with(&given, &mut backend, 1.0).unwrap_err();
        assert!(matches!(err, SolveError::LiteralOutOfRange { .. }));
    }
}
