//! Grid coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on the lattice.
///
/// `col` indexes the multiplicand digits (left to right, most significant
/// first) and `row` indexes the multiplier digits (top to bottom, most
/// significant first).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Column index (multiplicand digit index).
    pub col: usize,
    /// Row index (multiplier digit index).
    pub row: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Returns the position for a column-major linear index on a grid with
    /// `rows` rows.
    ///
    /// ```
    /// use lattice_core::Position;
    ///
    /// // 3 columns x 2 rows: 0 -> (0,0), 1 -> (0,1), 2 -> (1,0), ...
    /// assert_eq!(Position::from_column_major(1, 2), Position::new(0, 1));
    /// assert_eq!(Position::from_column_major(5, 2), Position::new(2, 1));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `rows` is zero.
    #[must_use]
    pub const fn from_column_major(index: usize, rows: usize) -> Self {
        assert!(rows > 0);
        Self::new(index / rows, index % rows)
    }

    /// Returns the column-major linear index on a grid with `rows` rows.
    #[must_use]
    pub const fn column_major_index(self, rows: usize) -> usize {
        self.col * rows + self.row
    }

    /// Returns the position one column to the left, if any.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        match self.col.checked_sub(1) {
            Some(col) => Some(Self::new(col, self.row)),
            None => None,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_major_roundtrip() {
        let rows = 3;
        for index in 0..12 {
            let pos = Position::from_column_major(index, rows);
            assert!(pos.row < rows);
            assert_eq!(pos.column_major_index(rows), index);
        }
    }

    #[test]
    fn test_left_neighbor() {
        assert_eq!(Position::new(2, 1).left(), Some(Position::new(1, 1)));
        assert_eq!(Position::new(0, 1).left(), None);
        assert_eq!(Position::new(2, 1).to_string(), "(2, 1)");
    }
}
