//! Lesson phases and the flat step index space.

/// A coarse stage of the lattice method.
///
/// Phases are listed in lesson order; the derived ordering follows it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum Phase {
    /// Clear space on the page.
    #[display("make space")]
    MakeSpace,
    /// Write the multiplicand along the top.
    #[display("write multiplicand")]
    WriteMultiplicand,
    /// Write the multiplier along the right side.
    #[display("write multiplier")]
    WriteMultiplier,
    /// Draw the grid and its cell diagonals.
    #[display("draw grid")]
    DrawGrid,
    /// Fill one cell per sub-step, column by column.
    #[display("multiply digits")]
    MultiplyDigits,
    /// Add one diagonal per sub-step, lower right first.
    #[display("add diagonals")]
    AddDiagonals,
    /// Read off the product.
    #[display("write solution")]
    WriteSolution,
}

impl Phase {
    /// All phases in lesson order.
    pub const ALL: [Self; 7] = [
        Self::MakeSpace,
        Self::WriteMultiplicand,
        Self::WriteMultiplier,
        Self::DrawGrid,
        Self::MultiplyDigits,
        Self::AddDiagonals,
        Self::WriteSolution,
    ];
}

/// A step index resolved to its phase and the sub-step within that phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepLocation {
    /// The phase the step belongs to.
    pub phase: Phase,
    /// Index of the step within its phase (always `0` for single-step phases).
    pub sub_index: usize,
}

/// Phase boundaries for one lattice size.
///
/// The table is an ordered list of `(phase, width)` pairs; step indices are
/// laid out back to back in that order. It depends only on the number of
/// multiplicand digits `m` and multiplier digits `n`.
///
/// # Examples
///
/// ```
/// use lattice_lesson::{Phase, PhaseTable, StepLocation};
///
/// // 3-digit multiplicand, 2-digit multiplier
/// let table = PhaseTable::new(3, 2);
/// assert_eq!(table.total_steps(), PhaseTable::WRITE_SOLUTION_OFFSET + 3 * 2 + (3 + 2));
///
/// assert_eq!(table.start_of(Phase::MultiplyDigits), 4);
/// assert_eq!(
///     table.locate(6),
///     Some(StepLocation { phase: Phase::MultiplyDigits, sub_index: 2 })
/// );
/// assert_eq!(table.locate(table.total_steps()), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhaseTable {
    columns: usize,
    rows: usize,
    widths: [(Phase, usize); 7],
}

impl PhaseTable {
    /// Number of steps outside the two sub-step phases (every phase other
    /// than [`Phase::MultiplyDigits`] and [`Phase::AddDiagonals`] is one step
    /// wide).
    pub const WRITE_SOLUTION_OFFSET: usize = 5;

    /// Builds the table for an `m x n` lattice.
    ///
    /// # Panics
    ///
    /// Panics if `columns` or `rows` is zero.
    #[must_use]
    pub const fn new(columns: usize, rows: usize) -> Self {
        assert!(columns > 0 && rows > 0);
        Self {
            columns,
            rows,
            widths: [
                (Phase::MakeSpace, 1),
                (Phase::WriteMultiplicand, 1),
                (Phase::WriteMultiplier, 1),
                (Phase::DrawGrid, 1),
                (Phase::MultiplyDigits, columns * rows),
                (Phase::AddDiagonals, columns + rows),
                (Phase::WriteSolution, 1),
            ],
        }
    }

    /// Returns the number of lattice columns the table was built for.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the number of lattice rows the table was built for.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the `(phase, width)` pairs in lesson order.
    #[must_use]
    pub fn entries(&self) -> &[(Phase, usize)] {
        &self.widths
    }

    /// Returns the number of steps in `phase`.
    #[must_use]
    pub fn width_of(&self, phase: Phase) -> usize {
        self.widths
            .iter()
            .find(|(p, _)| *p == phase)
            .map_or(0, |(_, width)| *width)
    }

    /// Returns the index of the first step of `phase`.
    #[must_use]
    pub fn start_of(&self, phase: Phase) -> usize {
        self.widths
            .iter()
            .take_while(|(p, _)| *p != phase)
            .map(|(_, width)| width)
            .sum()
    }

    /// Returns the total number of steps.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.widths.iter().map(|(_, width)| width).sum()
    }

    /// Returns the index of the final step.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.total_steps() - 1
    }

    /// Resolves a flat step index, or returns `None` past the last step.
    #[must_use]
    pub fn locate(&self, index: usize) -> Option<StepLocation> {
        let mut start = 0;
        for &(phase, width) in &self.widths {
            if index < start + width {
                return Some(StepLocation {
                    phase,
                    sub_index: index - start,
                });
            }
            start += width;
        }
        None
    }

    /// Returns the flat index of `location`, or `None` if its sub-step is out
    /// of range for the phase.
    #[must_use]
    pub fn index_of(&self, location: StepLocation) -> Option<usize> {
        (location.sub_index < self.width_of(location.phase))
            .then(|| self.start_of(location.phase) + location.sub_index)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_phase_boundaries_3_by_2() {
        let table = PhaseTable::new(3, 2);
        let starts: Vec<_> = Phase::ALL.iter().map(|&p| table.start_of(p)).collect();
        assert_eq!(starts, [0, 1, 2, 3, 4, 10, 15]);
        assert_eq!(table.total_steps(), 16);
        assert_eq!(table.last_index(), 15);
        assert_eq!(
            table.locate(15),
            Some(StepLocation {
                phase: Phase::WriteSolution,
                sub_index: 0
            })
        );
        assert_eq!(
            table.locate(10),
            Some(StepLocation {
                phase: Phase::AddDiagonals,
                sub_index: 0
            })
        );
        assert_eq!(table.locate(16), None);
    }

    #[test]
    fn test_single_digit_table() {
        let table = PhaseTable::new(1, 1);
        assert_eq!(table.width_of(Phase::MultiplyDigits), 1);
        assert_eq!(table.width_of(Phase::AddDiagonals), 2);
        assert_eq!(table.total_steps(), 8);
    }

    #[test]
    fn test_index_of_rejects_out_of_range_sub_steps() {
        let table = PhaseTable::new(2, 2);
        let location = StepLocation {
            phase: Phase::DrawGrid,
            sub_index: 1,
        };
        assert_eq!(table.index_of(location), None);
    }

    #[test]
    fn test_phase_order_and_display() {
        assert!(Phase::MakeSpace < Phase::DrawGrid);
        assert!(Phase::AddDiagonals < Phase::WriteSolution);
        assert_eq!(Phase::DrawGrid.to_string(), "draw grid");
        assert!(Phase::MultiplyDigits.is_multiply_digits());
    }

    proptest! {
        #[test]
        fn step_count_is_determined_by_digit_counts(m in 1_usize..=20, n in 1_usize..=20) {
            let table = PhaseTable::new(m, n);
            prop_assert_eq!(table.total_steps(), PhaseTable::WRITE_SOLUTION_OFFSET + m * n + m + n);
            prop_assert_eq!(table, PhaseTable::new(m, n));
        }

        #[test]
        fn locate_and_index_of_agree(m in 1_usize..=12, n in 1_usize..=12) {
            let table = PhaseTable::new(m, n);
            let mut previous: Option<StepLocation> = None;
            for index in 0..table.total_steps() {
                let location = table.locate(index).unwrap();
                prop_assert_eq!(table.index_of(location), Some(index));
                if let Some(previous) = previous {
                    prop_assert!(previous.phase <= location.phase);
                }
                previous = Some(location);
            }
        }
    }
}
