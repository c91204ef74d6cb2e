//! The solution decoder: reconstructs a concrete grid from a satisfying model.

use crate::error::SolveError;
use crate::sudoku::board::{BoardSize, Sudoku};
use crate::sudoku::variable::Variable;

/// Builds the solved grid a model describes: every positive literal sets its
/// cell to `value + 1`, negative literals are ignored entirely.
///
/// A model need not mention every variable, but under the cell exactly-one
/// family any model of a correct encoding carries exactly one positive
/// literal per cell, so the result is always fully filled. The decoder does
/// not re-validate rows, columns, or blocks; that belongs to
/// [`Sudoku::is_solved`].
///
/// # Errors
///
/// Returns [`SolveError::LiteralOutOfRange`] if a positive literal exceeds
/// the variable range of the board — a correct encoder/backend pair never
/// produces one, so it is surfaced instead of skipped.
pub fn decode_model(size: BoardSize, model: &[i32]) -> Result<Sudoku, SolveError> {
    let n = size.get();
    let mut grid = vec![vec![0usize; n]; n];

    for &literal in model {
        if literal <= 0 {
            continue;
        }
        if literal as usize > size.var_count() {
            return Err(SolveError::LiteralOutOfRange {
                literal,
                declared: size.var_count(),
            });
        }
        let var = Variable::decode(literal, size);
        grid[var.row][var.col] = var.value + 1;
    }

    Sudoku::new(grid)
        .map_err(|e| SolveError::Backend(format!("decoded model formed an invalid grid: {e}")))
}
