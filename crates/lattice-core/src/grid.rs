//! Column-major two-dimensional storage.

use std::ops::{Index, IndexMut};

use crate::Position;

/// A `columns x rows` grid stored in column-major order.
///
/// Column-major order is also the order in which the lattice is filled in, so
/// [`Grid::iter`] visits cells in the same order as the multiplication
/// sub-steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    columns: usize,
    rows: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Builds a grid by calling `f` for every position in column-major order.
    ///
    /// # Panics
    ///
    /// Panics if `columns` or `rows` is zero.
    #[must_use]
    pub fn from_fn(columns: usize, rows: usize, mut f: impl FnMut(Position) -> T) -> Self {
        assert!(columns > 0 && rows > 0, "grid dimensions must be non-zero");
        let cells = (0..columns * rows)
            .map(|index| f(Position::from_column_major(index, rows)))
            .collect();
        Self {
            columns,
            rows,
            cells,
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; grids have non-zero dimensions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.col < self.columns && pos.row < self.rows
    }

    /// Returns the value at `pos`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.contains(pos)
            .then(|| &self.cells[pos.column_major_index(self.rows)])
    }

    /// Returns the value at `pos` mutably, or `None` outside the grid.
    #[must_use]
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        if self.contains(pos) {
            Some(&mut self.cells[pos.column_major_index(self.rows)])
        } else {
            None
        }
    }

    /// Iterates over `(position, value)` pairs in column-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Position, &T)> + '_ {
        let rows = self.rows;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, value)| (Position::from_column_major(index, rows), value))
    }

    /// Returns the values of one column, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of range.
    #[must_use]
    pub fn column(&self, col: usize) -> &[T] {
        assert!(col < self.columns);
        &self.cells[col * self.rows..(col + 1) * self.rows]
    }

    /// Maps every value, preserving the layout.
    #[must_use]
    pub fn map<U>(&self, mut f: impl FnMut(Position, &T) -> U) -> Grid<U> {
        Grid {
            columns: self.columns,
            rows: self.rows,
            cells: self.iter().map(|(pos, value)| f(pos, value)).collect(),
        }
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(self.contains(pos), "position {pos} is outside the grid");
        &self.cells[pos.column_major_index(self.rows)]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        assert!(self.contains(pos), "position {pos} is outside the grid");
        &mut self.cells[pos.column_major_index(self.rows)]
    }
}
