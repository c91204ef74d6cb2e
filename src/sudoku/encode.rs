//! The constraint encoder: turns a puzzle into a CNF formula whose models
//! biject with the valid completions of that puzzle.
//!
//! Four structural families — cell, row, column, block — each impose
//! "exactly one" over N² groups of N candidate literals, and every given clue
//! adds one unit clause. Families are emitted in the fixed order
//! cell, row, column, block, clue; the order is irrelevant to correctness but
//! keeps formulas reproducible across runs.

use crate::sat::formula::Formula;
use crate::sudoku::board::{BoardSize, Sudoku};
use crate::sudoku::variable::Variable;
use itertools::Itertools;
use log::debug;
use smallvec::smallvec;

/// Emits the canonical exactly-one encoding for one group of candidates:
/// a single at-least-one clause over all of them, then one at-most-one clause
/// per unordered pair. Quadratic in the group size, but groups are only ever
/// N literals wide against N³ variables overall.
fn exactly_one(candidates: &[i32], formula: &mut Formula) {
    formula.push(candidates.iter().copied().collect());
    for (a, b) in candidates.iter().copied().tuple_combinations() {
        formula.push(smallvec![-a, -b]);
    }
}

/// Cell family: every cell holds exactly one value.
fn cell_clauses(size: BoardSize, formula: &mut Formula) {
    let n = size.get();
    for row in 0..n {
        for col in 0..n {
            let candidates: Vec<i32> = (0..n)
                .map(|value| Variable::new(row, col, value).index(size))
                .collect();
            exactly_one(&candidates, formula);
        }
    }
}

/// Row family: every value appears exactly once in each row.
fn row_clauses(size: BoardSize, formula: &mut Formula) {
    let n = size.get();
    for row in 0..n {
        for value in 0..n {
            let candidates: Vec<i32> = (0..n)
                .map(|col| Variable::new(row, col, value).index(size))
                .collect();
            exactly_one(&candidates, formula);
        }
    }
}

/// Column family: every value appears exactly once in each column.
fn column_clauses(size: BoardSize, formula: &mut Formula) {
    let n = size.get();
    for col in 0..n {
        for value in 0..n {
            let candidates: Vec<i32> = (0..n)
                .map(|row| Variable::new(row, col, value).index(size))
                .collect();
            exactly_one(&candidates, formula);
        }
    }
}

/// Block family: every value appears exactly once in each n×n block.
fn block_clauses(size: BoardSize, formula: &mut Formula) {
    let n = size.get();
    let block = size.block();
    for block_row in 0..block {
        for block_col in 0..block {
            for value in 0..n {
                let candidates: Vec<i32> = (0..block)
                    .cartesian_product(0..block)
                    .map(|(dr, dc)| {
                        Variable::new(block_row * block + dr, block_col * block + dc, value)
                            .index(size)
                    })
                    .collect();
                exactly_one(&candidates, formula);
            }
        }
    }
}

/// Clue family: one unit clause per given cell. The cell's own exactly-one
/// group already forbids every other value once the unit propagates, so no
/// extra negative clauses are needed.
fn clue_clauses(puzzle: &Sudoku, formula: &mut Formula) {
    let size = puzzle.size();
    for (row, cells) in puzzle.rows().enumerate() {
        for (col, &given) in cells.iter().enumerate() {
            if given != 0 {
                formula.push(smallvec![Variable::new(row, col, given - 1).index(size)]);
            }
        }
    }
}

/// Encodes `puzzle` as a CNF formula over N³ variables whose models
/// correspond exactly to the valid solutions extending the given clues.
///
/// Conflicting clues (the same value twice in a row, column, or block) make
/// the formula unsatisfiable by construction — a legitimate "no solution"
/// outcome, not an encoding failure.
#[must_use]
pub fn encode(puzzle: &Sudoku) -> Formula {
    let size = puzzle.size();
    let mut formula = Formula::new(size.var_count());

    cell_clauses(size, &mut formula);
    row_clauses(size, &mut formula);
    column_clauses(size, &mut formula);
    block_clauses(size, &mut formula);
    let structural = formula.len();
    clue_clauses(puzzle, &mut formula);

    debug!(
        "encoded {}x{} puzzle: {} vars, {} structural + {} clue clauses",
        size.get(),
        size.get(),
        formula.num_vars(),
        structural,
        formula.len() - structural,
    );

    formula
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::board::BoardSize;

    fn empty_puzzle(n: usize) -> Sudoku {
        Sudoku::new(vec![vec![0; n]; n]).unwrap()
    }

    /// One at-least-one clause plus C(N,2) at-most-one pairs per group, with
    /// N² groups in each of the four structural families.
    fn expected_structural(n: usize) -> usize {
        4 * n * n * (1 + n * (n - 1) / 2)
    }

    #[test]
    fn clause_count_for_4x4() {
        let formula = encode(&empty_puzzle(4));
        assert_eq!(expected_structural(4), 448);
        assert_eq!(formula.len(), 448);
        assert_eq!(formula.num_vars(), 64);
    }

    #[test]
    fn clause_count_for_9x9() {
        let formula = encode(&empty_puzzle(9));
        assert_eq!(expected_structural(9), 11_988);
        assert_eq!(formula.len(), 11_988);
        assert_eq!(formula.num_vars(), 729);
    }

    #[test]
    fn clues_add_one_unit_each() {
        let puzzle = Sudoku::new(vec![
            vec![0, 0, 0, 4],
            vec![0, 0, 0, 0],
            vec![2, 0, 0, 3],
            vec![4, 0, 1, 2],
        ])
        .unwrap();

        let formula = encode(&puzzle);
        assert_eq!(formula.len(), 448 + 6);

        let units: Vec<&[i32]> = formula
            .clauses()
            .iter()
            .skip(448)
            .map(|clause| clause.as_slice())
            .collect();
        let size = puzzle.size();
        let expected: Vec<i32> = vec![
            Variable::new(0, 3, 3).index(size),
            Variable::new(2, 0, 1).index(size),
            Variable::new(2, 3, 2).index(size),
            Variable::new(3, 0, 3).index(size),
            Variable::new(3, 2, 0).index(size),
            Variable::new(3, 3, 1).index(size),
        ];
        let found: Vec<i32> = units.iter().map(|clause| clause[0]).collect();
        assert_eq!(found, expected);
        assert!(units.iter().all(|clause| clause.len() == 1));
    }

    #[test]
    fn emission_order_starts_with_cell_group() {
        let formula = encode(&empty_puzzle(4));
        // First group is cell (0,0): its at-least-one clause, then the
        // C(4,2) = 6 pairwise at-most-one clauses.
        assert_eq!(formula.clauses()[0].as_slice(), &[1, 2, 3, 4]);
        assert_eq!(formula.clauses()[1].as_slice(), &[-1, -2]);
        assert_eq!(formula.clauses()[6].as_slice(), &[-3, -4]);
        // Next cell group starts right after.
        assert_eq!(formula.clauses()[7].as_slice(), &[5, 6, 7, 8]);
    }

    #[test]
    fn all_literals_lie_in_declared_range() {
        for n in [4usize, 9] {
            let formula = encode(&empty_puzzle(n));
            let max = i32::try_from(n * n * n).unwrap();
            for clause in formula.clauses() {
                assert!(!clause.is_empty());
                for &lit in clause {
                    assert!(lit != 0 && lit.abs() <= max);
                }
            }
        }
    }

    #[test]
    fn exactly_one_shape() {
        let mut formula = Formula::new(3);
        exactly_one(&[1, 2, 3], &mut formula);
        assert_eq!(formula.len(), 4);
        assert_eq!(formula.clauses()[0].as_slice(), &[1, 2, 3]);
        assert_eq!(formula.clauses()[1].as_slice(), &[-1, -2]);
        assert_eq!(formula.clauses()[2].as_slice(), &[-1, -3]);
        assert_eq!(formula.clauses()[3].as_slice(), &[-2, -3]);
    }

    #[test]
    fn block_groups_cover_whole_block() {
        let size = BoardSize::new(4).unwrap();
        let formula = encode(&empty_puzzle(4));
        // The block family begins after cell + row + column (3 · 16 · 7 = 336
        // clauses); its first clause is value 0 over block (0,0).
        let first_block = &formula.clauses()[336];
        let expected: Vec<i32> = [(0, 0), (0, 1), (1, 0), (1, 1)]
            .iter()
            .map(|&(r, c)| Variable::new(r, c, 0).index(size))
            .collect();
        assert_eq!(first_block.as_slice(), expected.as_slice());
    }
}
