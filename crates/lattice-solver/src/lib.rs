//! Lattice multiplication solver.
//!
//! Works a multiplication the way it is done with pencil and paper on a
//! lattice (Gelosia) grid, independently of native integer multiplication:
//!
//! 1. [`Lattice`](lattice_core::Lattice) holds every single-digit product
//!    split into tens and ones.
//! 2. [`DiagonalSummation`] adds the anti-diagonals from the lower right to the
//!    upper left, routing carries along the right and top edges and writing
//!    result digits along the bottom and left edges.
//! 3. [`ProductDigits`] re-carries the edge totals into the final product.
//!
//! [`LatticeSolution`] bundles all three for one operand pair.
//!
//! # Examples
//!
//! ```
//! use lattice_solver::LatticeSolution;
//!
//! let solution = LatticeSolution::solve("321".parse()?, "12".parse()?);
//! assert_eq!(solution.product().to_string(), "3852");
//! # Ok::<(), lattice_core::OperandError>(())
//! ```

pub use self::{assemble::*, diagonal::*, solution::*, summation::*};

mod assemble;
mod diagonal;
mod solution;
mod summation;
