use lattice_core::{Digit, Lattice, Operand};

use crate::{Diagonal, DiagonalSummation, ProductDigits};

/// The complete, immutable worked solution for one operand pair.
///
/// Built once per operand change; the step sequencer only ever reads from it.
///
/// # Examples
///
/// ```
/// use lattice_core::{Digit, Operand};
/// use lattice_solver::LatticeSolution;
///
/// let solution = LatticeSolution::solve("123".parse()?, "45".parse()?);
/// assert_eq!(solution.columns(), 3);
/// assert_eq!(solution.rows(), 2);
/// assert_eq!(solution.product().to_string(), "5535");
/// assert_eq!(solution.product().value(), Some(solution.native_product()));
/// # Ok::<(), lattice_core::OperandError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LatticeSolution {
    multiplicand: Operand,
    multiplier: Operand,
    lattice: Lattice,
    summation: DiagonalSummation,
    product: ProductDigits,
}

impl LatticeSolution {
    /// Works the whole multiplication: builds the lattice, sums its
    /// diagonals, and assembles the product from the edge totals.
    #[must_use]
    pub fn solve(multiplicand: Operand, multiplier: Operand) -> Self {
        let lattice = Lattice::from_operands(multiplicand, multiplier);
        let summation = DiagonalSummation::run(&lattice);
        let product = ProductDigits::assemble(summation.totals_bottom(), summation.totals_left());
        Self {
            multiplicand,
            multiplier,
            lattice,
            summation,
            product,
        }
    }

    /// Returns the multiplicand.
    #[must_use]
    pub fn multiplicand(&self) -> Operand {
        self.multiplicand
    }

    /// Returns the multiplier.
    #[must_use]
    pub fn multiplier(&self) -> Operand {
        self.multiplier
    }

    /// Returns the number of lattice columns (multiplicand digits).
    #[must_use]
    pub fn columns(&self) -> usize {
        self.lattice.columns()
    }

    /// Returns the number of lattice rows (multiplier digits).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.lattice.rows()
    }

    /// Returns the multiplicand digits.
    #[must_use]
    pub fn multiplicand_digits(&self) -> &[Digit] {
        self.lattice.multiplicand()
    }

    /// Returns the multiplier digits.
    #[must_use]
    pub fn multiplier_digits(&self) -> &[Digit] {
        self.lattice.multiplier()
    }

    /// Returns the filled lattice.
    #[must_use]
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Returns the diagonal summation.
    #[must_use]
    pub fn summation(&self) -> &DiagonalSummation {
        &self.summation
    }

    /// Returns the diagonals in processing order.
    #[must_use]
    pub fn diagonals(&self) -> &[Diagonal] {
        self.summation.diagonals()
    }

    /// Returns the product read off the lattice.
    #[must_use]
    pub fn product(&self) -> &ProductDigits {
        &self.product
    }

    /// Returns the product computed with native integer multiplication.
    #[must_use]
    pub fn native_product(&self) -> u128 {
        u128::from(self.multiplicand.value()) * u128::from(self.multiplier.value())
    }
}

#[cfg(test)]
mod tests {
    use lattice_core::Digit::{D2, D3, D5, D8};
    use proptest::prelude::*;

    use super::*;

    fn solve(a: u64, b: u64) -> LatticeSolution {
        LatticeSolution::solve(Operand::new(a).unwrap(), Operand::new(b).unwrap())
    }

    #[test]
    fn test_solution_321_by_12() {
        let solution = solve(321, 12);
        assert_eq!(solution.product().digits(), [D3, D8, D5, D2]);
        assert_eq!(solution.native_product(), 3852);
    }

    #[test]
    fn test_solution_123_by_45() {
        let solution = solve(123, 45);
        assert_eq!(solution.multiplicand_digits().len(), 3);
        assert_eq!(solution.multiplier_digits().len(), 2);
        assert_eq!(solution.product().digits(), [D5, D5, D3, D5]);
        assert_eq!(solution.diagonals().len(), 5);
    }

    #[test]
    fn test_solution_extremes() {
        let solution = solve(u64::MAX, u64::MAX);
        assert_eq!(solution.product().value(), Some(solution.native_product()));
        assert_eq!(solution.product().lattice_digits().len(), 40);

        let one = solve(1, 1);
        assert_eq!(one.product().to_string(), "1");
    }

    proptest! {
        #[test]
        fn lattice_product_matches_native_product(a in 1_u64.., b in 1_u64..) {
            let solution = solve(a, b);
            prop_assert_eq!(solution.product().value(), Some(solution.native_product()));
            prop_assert_eq!(
                solution.product().lattice_digits().len(),
                solution.columns() + solution.rows()
            );
        }

        #[test]
        fn solving_is_deterministic(a in 1_u64..100_000_000, b in 1_u64..100_000_000) {
            prop_assert_eq!(solve(a, b), solve(a, b));
        }
    }
}
