#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! The CNF boundary: the formula container handed to the solver and the
//! capability interface any SAT backend must provide.

/// The `backend` module defines the solver capability interface and its outcomes.
pub mod backend;

/// The `formula` module provides the passive CNF clause container.
pub mod formula;

/// The `splr` module implements the backend interface over the `splr` CDCL solver.
pub mod splr;
