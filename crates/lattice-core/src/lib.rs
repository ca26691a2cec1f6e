//! Core data structures for lattice multiplication.
//!
//! This crate provides the value types shared by the solver, the step
//! sequencer, and the application layer.
//!
//! # Overview
//!
//! 1. **Digits and operands**
//!    - [`digit`]: Type-safe representation of decimal digits 0-9
//!    - [`decompose`]: Integer to digit-sequence conversion (and back)
//!    - [`operand`]: Positive integer operands parsed from user input
//!
//! 2. **The lattice**
//!    - [`position`]: `(col, row)` cell coordinates
//!    - [`grid`]: Column-major storage used for the lattice and its partial views
//!    - [`cell`]: Single-digit products split into tens and ones
//!    - [`lattice`]: The full cross-product grid for an operand pair
//!
//! 3. **Progressive reveal**
//!    - [`slot`]: `Hidden | Revealed(value)` placeholders for step snapshots
//!
//! # Examples
//!
//! ```
//! use lattice_core::{Lattice, Operand, Position};
//!
//! let multiplicand: Operand = "321".parse()?;
//! let multiplier: Operand = "12".parse()?;
//! let lattice = Lattice::from_operands(multiplicand, multiplier);
//!
//! // 3 * 2 = 06
//! assert_eq!(lattice[Position::new(0, 1)].product(), 6);
//! # Ok::<(), lattice_core::OperandError>(())
//! ```

pub mod cell;
pub mod decompose;
pub mod digit;
pub mod grid;
pub mod lattice;
pub mod operand;
pub mod position;
pub mod slot;

// Re-export commonly used types
pub use self::{
    cell::{Cell, CellPart},
    digit::{Digit, DigitError},
    grid::Grid,
    lattice::Lattice,
    operand::{Operand, OperandError},
    position::Position,
    slot::Slot,
};
