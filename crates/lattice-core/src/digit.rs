//! Base-10 digit representation.

use std::fmt::{self, Display};

/// A decimal digit in the range 0-9.
///
/// Every digit written on the lattice (operand digits, the two halves of a
/// cell product, totals) is a `Digit`, so out-of-range values cannot reach the
/// grid.
///
/// # Examples
///
/// ```
/// use lattice_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Create from a u8 value
/// let digit = Digit::from_value(7);
/// assert_eq!(digit, Digit::D7);
///
/// // Fallible conversion
/// assert!(Digit::try_from(10).is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 0.
    #[default]
    D0 = 0,
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

/// Error returned when converting an out-of-range value into a [`Digit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid digit value: {value}")]
pub struct DigitError {
    /// The rejected value.
    pub value: u8,
}

impl Digit {
    /// Array containing all digits from 0 to 9.
    pub const ALL: [Self; 10] = [
        Self::D0,
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value in the range 0-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 0-9.
    ///
    /// ```should_panic
    /// use lattice_core::Digit;
    ///
    /// // This will panic
    /// let _ = Digit::from_value(10);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match Self::try_from(value) {
            Ok(digit) => digit,
            Err(err) => panic!("Invalid digit value: {}", err.value),
        }
    }

    /// Returns the numeric value of this digit (0-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Splits `value` into its tens and ones digits.
    ///
    /// Returns `None` if `value` has more than two digits.
    ///
    /// ```
    /// use lattice_core::Digit;
    ///
    /// assert_eq!(Digit::split_tens_ones(81), Some((Digit::D8, Digit::D1)));
    /// assert_eq!(Digit::split_tens_ones(6), Some((Digit::D0, Digit::D6)));
    /// assert_eq!(Digit::split_tens_ones(100), None);
    /// ```
    #[must_use]
    pub fn split_tens_ones(value: u32) -> Option<(Self, Self)> {
        if value >= 100 {
            return None;
        }
        Some((Self::from_remainder(value / 10), Self::from_remainder(value)))
    }

    /// Returns the ones digit of `value` (`value mod 10`).
    #[must_use]
    pub fn from_remainder(value: u32) -> Self {
        #[expect(clippy::cast_possible_truncation)]
        Self::from_value((value % 10) as u8)
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(DigitError { value })
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

impl From<Digit> for u32 {
    fn from(digit: Digit) -> u32 {
        u32::from(digit.value())
    }
}
