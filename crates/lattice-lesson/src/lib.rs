//! Step-by-step lessons for lattice multiplication.
//!
//! A [`Lesson`] turns a [`LatticeSolution`](lattice_solver::LatticeSolution)
//! into a flat, replayable sequence of [`Step`] snapshots:
//!
//! 1. make space on the page,
//! 2. write the multiplicand,
//! 3. write the multiplier,
//! 4. draw the grid,
//! 5. multiply one pair of digits per sub-step (`m * n` sub-steps, column by
//!    column),
//! 6. add one diagonal per sub-step (`m + n` sub-steps, lowest right first),
//! 7. write the solution.
//!
//! The mapping from a step index to its [`Phase`] is kept in a [`PhaseTable`],
//! and each step comes with a [`Narration`] for the translation layer.

pub use self::{lesson::*, narration::*, phase::*, step::*};

mod lesson;
mod narration;
mod phase;
mod step;
