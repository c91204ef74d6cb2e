//! The solver capability interface.
//!
//! The encoder only ever talks to a [`SatBackend`], so any conforming SAT
//! engine can sit behind it. The contract mirrors the classic incremental
//! solver surface: declare the variable range, feed clauses (which may expose
//! a trivial contradiction), then solve with an explicit timeout.

use crate::error::SolveError;

/// The three terminal results of a SAT call.
///
/// `Unsatisfiable` is a normal outcome, not an error: a puzzle with
/// conflicting clues produces it by construction. `TimedOut` must never be
/// collapsed into `Unsatisfiable` — an incomplete search proves nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatOutcome {
    /// A satisfying assignment was found. The model lists signed literals;
    /// variables absent from it are unconstrained.
    Satisfiable(Vec<i32>),
    /// The formula has no model.
    Unsatisfiable,
    /// The search did not finish within the timeout.
    TimedOut,
}

/// An external SAT engine, reduced to the three operations the encoder needs.
pub trait SatBackend {
    /// Declares the variable range `1..=count`. Must be called before any
    /// clause referencing a variable beyond the previously declared range.
    fn declare_variables(&mut self, count: usize);

    /// Adds one clause to the running conjunction.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Contradiction`] if the conjunction becomes
    /// trivially false (e.g. two unit clauses assert a literal and its
    /// negation), and [`SolveError::LiteralOutOfRange`] if a literal falls
    /// outside the declared range. Both indicate an encoder bug and are fatal.
    fn add_clause(&mut self, literals: &[i32]) -> Result<(), SolveError>;

    /// Runs the search, giving up after `timeout_secs` seconds.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Backend`] if the engine fails for a reason other
    /// than unsatisfiability or timeout — those two are [`SatOutcome`]s.
    fn solve(&mut self, timeout_secs: f64) -> Result<SatOutcome, SolveError>;
}
