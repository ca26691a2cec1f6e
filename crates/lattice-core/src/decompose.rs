//! Conversion between integers and their base-10 digit sequences.

use crate::Digit;

/// Returns the base-10 digits of `value`, most significant digit first.
///
/// `0` yields `[0]`; any other value yields a sequence without leading zeros.
///
/// # Examples
///
/// ```
/// use lattice_core::{Digit, decompose::digits_of};
///
/// assert_eq!(digits_of(321), [Digit::D3, Digit::D2, Digit::D1]);
/// assert_eq!(digits_of(0), [Digit::D0]);
/// ```
#[must_use]
pub fn digits_of(value: u64) -> Vec<Digit> {
    let mut digits = Vec::with_capacity(digit_count(value));
    let mut rest = value;
    loop {
        #[expect(clippy::cast_possible_truncation)]
        digits.push(Digit::from_value((rest % 10) as u8));
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Returns the number of base-10 digits needed to write `value`.
///
/// `0` is written with one digit.
#[must_use]
pub fn digit_count(value: u64) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Reads a most-significant-first digit sequence back as a number.
///
/// Returns `None` if the value does not fit in a `u128`. An empty sequence
/// reads as `0`.
///
/// ```
/// use lattice_core::{Digit, decompose::value_of};
///
/// assert_eq!(value_of(&[Digit::D0, Digit::D4, Digit::D2]), Some(42));
/// ```
#[must_use]
pub fn value_of(digits: &[Digit]) -> Option<u128> {
    digits.iter().try_fold(0_u128, |acc, &digit| {
        acc.checked_mul(10)?.checked_add(u128::from(digit.value()))
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_digits_of_known_values() {
        assert_eq!(digits_of(0), [Digit::D0]);
        assert_eq!(digits_of(7), [Digit::D7]);
        assert_eq!(digits_of(10), [Digit::D1, Digit::D0]);
        assert_eq!(digits_of(123), [Digit::D1, Digit::D2, Digit::D3]);
        assert_eq!(digits_of(u64::MAX).len(), 20);
    }

    #[test]
    fn test_digit_count_boundaries() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(99_999), 5);
        assert_eq!(digit_count(100_000), 6);
        assert_eq!(digit_count(u64::MAX), 20);
    }

    #[test]
    fn test_value_of_overflow() {
        let too_long = vec![Digit::D9; 40];
        assert_eq!(value_of(&too_long), None);
        assert_eq!(value_of(&[]), Some(0));
    }

    proptest! {
        #[test]
        fn digits_have_no_leading_zero(value in 1_u64..) {
            let digits = digits_of(value);
            prop_assert_ne!(digits[0], Digit::D0);
            prop_assert_eq!(digits.len(), digit_count(value));
        }

        #[test]
        fn digits_read_back_to_value(value: u64) {
            prop_assert_eq!(value_of(&digits_of(value)), Some(u128::from(value)));
        }
    }
}
