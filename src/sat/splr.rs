//! A [`SatBackend`] implementation over the `splr` CDCL solver.
//!
//! Clauses are buffered and handed to `splr` in one batch when `solve` is
//! called; `splr` derives the variable count from the literals it sees, which
//! for this encoding always covers the full declared range (the cell
//! at-least-one clauses mention every variable). Unit clauses are checked
//! against each other as they arrive so that a trivially false conjunction is
//! reported during construction, as the backend contract requires.

use crate::error::SolveError;
use crate::sat::backend::{SatBackend, SatOutcome};
use rustc_hash::FxHashMap;
use splr::{Certificate, Config, SolveIF, Solver, SolverError};

/// A buffering adapter around `splr`.
#[derive(Debug, Default)]
pub struct SplrBackend {
    declared: usize,
    clauses: Vec<Vec<i32>>,
    /// Polarity of every unit clause seen so far, keyed by variable id.
    units: FxHashMap<usize, bool>,
}

impl SplrBackend {
    /// Creates an empty backend with no declared variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn check_literal(&self, literal: i32) -> Result<(), SolveError> {
        let var = literal.unsigned_abs() as usize;
        if literal == 0 || var > self.declared {
            return Err(SolveError::LiteralOutOfRange {
                literal,
                declared: self.declared,
            });
        }
        Ok(())
    }
}

impl SatBackend for SplrBackend {
    fn declare_variables(&mut self, count: usize) {
        self.declared = count;
    }

    fn add_clause(&mut self, literals: &[i32]) -> Result<(), SolveError> {
        if literals.is_empty() {
            return Err(SolveError::Contradiction(String::from(
                "empty clause added",
            )));
        }
        for &lit in literals {
            self.check_literal(lit)?;
        }

        if let [lit] = literals {
            let var = lit.unsigned_abs() as usize;
            let polarity = *lit > 0;
            match self.units.insert(var, polarity) {
                Some(previous) if previous != polarity => {
                    return Err(SolveError::Contradiction(format!(
                        "unit clauses assert both {var} and -{var}"
                    )));
                }
                _ => {}
            }
        }

        self.clauses.push(literals.to_vec());
        Ok(())
    }

    fn solve(&mut self, timeout_secs: f64) -> Result<SatOutcome, SolveError> {
        let mut config = Config::default();
        config.c_timeout = timeout_secs;

        let mut solver = match Solver::try_from((config, self.clauses.as_slice())) {
            Ok(solver) => solver,
            // splr reports a formula it can already decide while loading
            // through the error channel.
            Err(Ok(Certificate::UNSAT)) => return Ok(SatOutcome::Unsatisfiable),
            Err(Ok(Certificate::SAT(model))) => return Ok(SatOutcome::Satisfiable(model)),
            Err(Err(e)) => return map_solver_error(&e),
        };

        match solver.solve() {
            Ok(Certificate::SAT(model)) => Ok(SatOutcome::Satisfiable(model)),
            Ok(Certificate::UNSAT) => Ok(SatOutcome::Unsatisfiable),
            Err(e) => map_solver_error(&e),
        }
    }
}

/// Maps `splr` errors onto the backend contract: timeouts and root-level
/// conflicts are terminal outcomes, everything else is a backend failure.
fn map_solver_error(error: &SolverError) -> Result<SatOutcome, SolveError> {
    match error {
        SolverError::TimeOut => Ok(SatOutcome::TimedOut),
        SolverError::Inconsistent | SolverError::RootLevelConflict(_) => {
            Ok(SatOutcome::Unsatisfiable)
        }
        other => Err(SolveError::Backend(format!("{other:?}"))),
    }
}
