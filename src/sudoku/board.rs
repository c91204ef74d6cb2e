//! The puzzle board: a validated N×N grid of values in `[0, N]`, 0 meaning
//! empty, where N must be a positive perfect square. Construction is the only
//! place shape and range are checked; everything downstream relies on it.

use crate::error::PuzzleError;
use std::fmt;

/// A validated board dimension: a positive perfect square N = n².
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Validates `size` as a board dimension.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::NotPerfectSquare`] unless `size` is a positive
    /// perfect square.
    pub fn new(size: usize) -> Result<Self, PuzzleError> {
        let root = size.isqrt();
        if size == 0 || root * root != size {
            return Err(PuzzleError::NotPerfectSquare(size));
        }
        Ok(Self(size))
    }

    /// The board dimension N.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// The block dimension n = √N.
    #[must_use]
    pub const fn block(self) -> usize {
        self.0.isqrt()
    }

    /// The number of Boolean variables the encoding uses: N³.
    #[must_use]
    pub const fn var_count(self) -> usize {
        self.0 * self.0 * self.0
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = PuzzleError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// An N×N Sudoku grid, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sudoku {
    board: Vec<Vec<usize>>,
    size: BoardSize,
}

impl Sudoku {
    /// Builds a puzzle from a grid, validating shape and value range.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] if the grid is not square, its dimension is
    /// not a positive perfect square, or any cell lies outside `0..=N`.
    pub fn new(board: Vec<Vec<usize>>) -> Result<Self, PuzzleError> {
        let size = BoardSize::new(board.len())?;
        let n = size.get();

        for (row, cells) in board.iter().enumerate() {
            if cells.len() != n {
                return Err(PuzzleError::RowWidth {
                    row,
                    expected: n,
                    found: cells.len(),
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                if value > n {
                    return Err(PuzzleError::CellOutOfRange {
                        row,
                        col,
                        value,
                        max: n,
                    });
                }
            }
        }

        Ok(Self { board, size })
    }

    /// The validated board dimension.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// The value at `(row, col)`, 0 meaning empty.
    #[must_use]
    pub fn value(&self, row: usize, col: usize) -> usize {
        self.board[row][col]
    }

    /// Iterates over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        self.board.iter().map(Vec::as_slice)
    }

    /// Whether the grid is completely and correctly solved: no empty cells,
    /// and every row, column, and block holds each of 1..=N exactly once.
    ///
    /// This is the independent full-grid validator; the solution decoder does
    /// not re-check structure itself and hands its output here instead.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let n = self.size.get();

        let all_filled = self
            .board
            .iter()
            .all(|row| row.iter().all(|&value| value > 0));
        if !all_filled {
            return false;
        }

        for row in 0..n {
            let mut seen = vec![0usize; n];
            for col in 0..n {
                seen[self.board[row][col] - 1] += 1;
            }
            if seen.iter().any(|&count| count != 1) {
                return false;
            }
        }

        for col in 0..n {
            let mut seen = vec![0usize; n];
            for row in 0..n {
                seen[self.board[row][col] - 1] += 1;
            }
            if seen.iter().any(|&count| count != 1) {
                return false;
            }
        }

        let block = self.size.block();
        for block_row in 0..block {
            for block_col in 0..block {
                let mut seen = vec![0usize; n];
                for dr in 0..block {
                    for dc in 0..block {
                        let value = self.board[block_row * block + dr][block_col * block + dc];
                        seen[value - 1] += 1;
                    }
                }
                if seen.iter().any(|&count| count != 1) {
                    return false;
                }
            }
        }

        true
    }
}

impl TryFrom<Vec<Vec<usize>>> for Sudoku {
    type Error = PuzzleError;

    fn try_from(board: Vec<Vec<usize>>) -> Result<Self, Self::Error> {
        Self::new(board)
    }
}

impl From<Sudoku> for Vec<Vec<usize>> {
    fn from(sudoku: Sudoku) -> Self {
        sudoku.board
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.board {
            let mut first = true;
            for cell in row {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
