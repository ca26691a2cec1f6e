//! Reading the product off the lattice edges.

use lattice_core::{Digit, decompose};

/// The product of a lattice multiplication, derived from the edge totals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductDigits {
    lattice_digits: Vec<Digit>,
    digits: Vec<Digit>,
}

impl ProductDigits {
    /// Combines the bottom and left totals into the product digits.
    ///
    /// The totals are added right to left with carry, first along the bottom
    /// edge (the least significant end) and continuing up the left edge. A
    /// residual carry becomes a new leading digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use lattice_core::Digit::*;
    /// use lattice_solver::ProductDigits;
    ///
    /// // 321 * 12, read off the lattice as 0 3 | 8 5 2
    /// let product = ProductDigits::assemble(&[D8, D5, D2], &[D0, D3]);
    /// assert_eq!(product.lattice_digits(), [D0, D3, D8, D5, D2]);
    /// assert_eq!(product.digits(), [D3, D8, D5, D2]);
    /// assert_eq!(product.value(), Some(3852));
    /// ```
    #[must_use]
    pub fn assemble(totals_bottom: &[Digit], totals_left: &[Digit]) -> Self {
        let mut reversed = Vec::with_capacity(totals_bottom.len() + totals_left.len() + 1);
        let mut carry = 0_u32;
        for &digit in totals_bottom.iter().rev().chain(totals_left.iter().rev()) {
            let sum = u32::from(digit) + carry;
            reversed.push(Digit::from_remainder(sum));
            carry = sum / 10;
        }
        while carry > 0 {
            reversed.push(Digit::from_remainder(carry));
            carry /= 10;
        }
        reversed.reverse();
        let lattice_digits = reversed;

        let leading_zeros = lattice_digits
            .iter()
            .take(lattice_digits.len().saturating_sub(1))
            .take_while(|&&digit| digit == Digit::D0)
            .count();
        let digits = lattice_digits[leading_zeros..].to_vec();

        Self {
            lattice_digits,
            digits,
        }
    }

    /// Returns every digit as read off the lattice edges, including a leading
    /// zero when the product is one digit shorter than `m + n`.
    #[must_use]
    pub fn lattice_digits(&self) -> &[Digit] {
        &self.lattice_digits
    }

    /// Returns the product digits without leading zeros.
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Returns the product as a number, or `None` if it does not fit in a
    /// `u128`.
    #[must_use]
    pub fn value(&self) -> Option<u128> {
        decompose::value_of(&self.digits)
    }
}

impl std::fmt::Display for ProductDigits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in &self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
