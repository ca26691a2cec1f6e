//! Random operand pairs for lattice multiplication practice.
//!
//! [`OperandGenerator`] draws a multiplicand and a multiplier uniformly from an
//! inclusive range. Every pair comes with the [`OperandSeed`] that produced
//! it, so a pair can be reproduced with
//! [`OperandGenerator::generate_with_seed`].
//!
//! # Examples
//!
//! ```
//! use lattice_generator::OperandGenerator;
//!
//! let generator = OperandGenerator::default();
//! let pair = generator.generate();
//! assert!((100..=9999).contains(&pair.multiplicand.value()));
//!
//! // The same seed always yields the same pair.
//! assert_eq!(generator.generate_with_seed(pair.seed), pair);
//! ```

use std::{
    fmt::{self, Display},
    ops::RangeInclusive,
    str::FromStr,
};

use lattice_core::Operand;
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;

/// Seed for reproducible operand generation (32 bytes, written as 64 hex
/// digits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperandSeed([u8; 32]);

/// Errors from parsing an [`OperandSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {_0} characters")]
    InvalidLength(#[error(not(source))] usize),
    /// The text contains a non-hex character.
    #[display("seed contains a non-hex character")]
    InvalidHex,
}

impl OperandSeed {
    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for OperandSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl FromStr for OperandSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(SeedParseError::InvalidLength(s.len()));
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let pair = std::str::from_utf8(pair).map_err(|_| SeedParseError::InvalidHex)?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| SeedParseError::InvalidHex)?;
        }
        Ok(Self(bytes))
    }
}

impl Display for OperandSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// A generated multiplicand/multiplier pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedOperands {
    /// The multiplicand.
    pub multiplicand: Operand,
    /// The multiplier.
    pub multiplier: Operand,
    /// The seed that produced this pair.
    pub seed: OperandSeed,
}

/// Error returned for a range that contains no positive integers.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("operand range {start}..={end} contains no positive integers")]
pub struct InvalidRangeError {
    /// Lower bound of the rejected range.
    pub start: u64,
    /// Upper bound of the rejected range.
    pub end: u64,
}

/// Draws operand pairs uniformly from an inclusive range.
#[derive(Debug, Clone)]
pub struct OperandGenerator {
    range: RangeInclusive<u64>,
}

impl Default for OperandGenerator {
    /// Operands between 100 and 9999, inclusive.
    fn default() -> Self {
        Self {
            range: Self::DEFAULT_RANGE,
        }
    }
}

impl OperandGenerator {
    /// Range used by [`OperandGenerator::default`].
    pub const DEFAULT_RANGE: RangeInclusive<u64> = 100..=9999;

    /// Creates a generator for operands in `range`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRangeError`] if `range` is empty or only contains
    /// zero.
    pub fn new(range: RangeInclusive<u64>) -> Result<Self, InvalidRangeError> {
        let (start, end) = (*range.start(), *range.end());
        if end == 0 || start > end {
            return Err(InvalidRangeError { start, end });
        }
        Ok(Self {
            range: start.max(1)..=end,
        })
    }

    /// Returns the range operands are drawn from.
    #[must_use]
    pub fn range(&self) -> &RangeInclusive<u64> {
        &self.range
    }

    /// Generates a pair with a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedOperands {
        self.generate_with_seed(OperandSeed::random())
    }

    /// Generates the pair determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: OperandSeed) -> GeneratedOperands {
        let mut rng = Pcg64::from_seed(seed.0);
        let mut draw = || {
            let value = rng.random_range(self.range.clone());
            Operand::new(value).unwrap_or(Operand::MIN)
        };
        let multiplicand = draw();
        let multiplier = draw();
        GeneratedOperands {
            multiplicand,
            multiplier,
            seed,
        }
    }
}
