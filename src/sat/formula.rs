//! A passive CNF container: a declared variable count plus an ordered clause
//! sequence. Clause order never affects satisfiability, only solver heuristics,
//! so it is kept stable for reproducible fixtures.

use smallvec::SmallVec;
use std::fmt;

/// A disjunction of literals. Positive literals assert a variable, negative
/// literals assert its negation. Most clauses in the Sudoku encoding are the
/// binary at-most-one pairs, so a small inline capacity avoids allocating them.
pub type Clause = SmallVec<[i32; 4]>;

/// A CNF formula: the number of declared variables and the clauses over them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    num_vars: usize,
    clauses: Vec<Clause>,
}

impl Formula {
    /// Creates an empty formula over `num_vars` variables.
    #[must_use]
    pub const fn new(num_vars: usize) -> Self {
        Self {
            num_vars,
            clauses: Vec::new(),
        }
    }

    /// Appends a clause. Every literal magnitude must already lie in
    /// `1..=num_vars`; the encoder guarantees this by construction.
    pub fn push(&mut self, clause: Clause) {
        debug_assert!(!clause.is_empty());
        debug_assert!(
            clause
                .iter()
                .all(|&lit| lit != 0 && lit.unsigned_abs() as usize <= self.num_vars)
        );
        self.clauses.push(clause);
    }

    /// Number of declared variables.
    #[must_use]
    pub const fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// The clauses, in emission order.
    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Number of clauses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the formula has no clauses yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// Renders the formula in DIMACS CNF format.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "p cnf {} {}", self.num_vars, self.clauses.len())?;
        for clause in &self.clauses {
            for lit in clause {
                write!(f, "{lit} ")?;
            }
            writeln!(f, "0")?;
        }
        Ok(())
    }
}
