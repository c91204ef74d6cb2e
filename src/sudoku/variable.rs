//! The variable indexer: a total bijection between zero-based
//! (row, col, value) triples and variable ids in `[1, N³]`.
//!
//! The arithmetic here is the single most safety-critical invariant of the
//! encoding — an off-by-one silently corrupts every constraint family — so
//! both directions live side by side and are tested exhaustively.

use crate::sudoku::board::BoardSize;

/// One proposition of the encoding: "cell (row, col) holds value + 1".
/// All three coordinates are zero-based and lie in `[0, N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
    /// Zero-based value (the cell digit minus one).
    pub value: usize,
}

impl Variable {
    /// Creates a variable for the given triple.
    #[must_use]
    pub const fn new(row: usize, col: usize, value: usize) -> Self {
        Self { row, col, value }
    }

    /// Maps this triple to its variable id: `row·N² + col·N + value + 1`.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is outside `[0, N)` or the id does not fit in
    /// an `i32`. Callers derive coordinates from a validated board, so either
    /// is a programmer error, not a data error.
    #[must_use]
    pub fn index(self, size: BoardSize) -> i32 {
        let n = size.get();
        assert!(
            self.row < n && self.col < n && self.value < n,
            "variable ({}, {}, {}) out of range for board size {n}",
            self.row,
            self.col,
            self.value,
        );

        let id = self.row * n * n + self.col * n + self.value + 1;
        i32::try_from(id).unwrap_or_else(|_| panic!("variable id {id} exceeds i32 range"))
    }

    /// Inverts [`Variable::index`]: recovers the triple from a variable id.
    ///
    /// # Panics
    ///
    /// Panics if `id` lies outside `[1, N³]`.
    #[must_use]
    pub fn decode(id: i32, size: BoardSize) -> Self {
        let n = size.get();
        assert!(
            id >= 1 && id as usize <= size.var_count(),
            "variable id {id} out of range for board size {n}",
        );

        let x = id as usize - 1;
        Self {
            row: x / (n * n),
            col: (x / n) % n,
            value: x % n,
        }
    }
}
