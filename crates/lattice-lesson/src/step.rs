//! Partially revealed snapshots of a lattice solution.

use lattice_core::{Cell, Digit, Grid, Slot};
use lattice_solver::{CarrySlot, Diagonal, LatticeSolution, ProductDigits, TotalSlot};

use crate::{Phase, StepLocation};

/// Everything written on the page at one step of the lesson.
///
/// Hidden values are [`Slot::Hidden`]. The edge vectors always have their
/// final lengths (`m`, `n`, `n - 1` and `m` entries), so a renderer can lay
/// out the frame before any of it is filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Flat step index.
    pub index: usize,
    /// Phase and sub-step of this step.
    pub location: StepLocation,
    /// Digits along the top edge, most significant first.
    pub multiplicand: Vec<Slot<Digit>>,
    /// Digits along the right edge, most significant first.
    pub multiplier: Vec<Slot<Digit>>,
    /// The grid, once it has been drawn.
    pub lattice: Option<Grid<Slot<Cell>>>,
    /// Carries along the top edge, left to right.
    pub carry_top: Vec<Slot<u32>>,
    /// Carries along the right edge, top to bottom.
    pub carry_right: Vec<Slot<u32>>,
    /// Totals along the bottom edge, left to right.
    pub totals_bottom: Vec<Slot<Digit>>,
    /// Totals along the left edge, top to bottom.
    pub totals_left: Vec<Slot<Digit>>,
    /// Diagonals summed so far, in processing order.
    pub diagonals: Vec<Diagonal>,
    /// The product, once it has been read off.
    pub solution: Slot<ProductDigits>,
}

impl Step {
    /// Builds the snapshot of `solution` at `location`.
    pub(crate) fn build(solution: &LatticeSolution, index: usize, location: StepLocation) -> Self {
        let phase = location.phase;
        let m = solution.columns();
        let n = solution.rows();

        let multiplicand = reveal_all(
            solution.multiplicand_digits(),
            phase >= Phase::WriteMultiplicand,
        );
        let multiplier = reveal_all(
            solution.multiplier_digits(),
            phase >= Phase::WriteMultiplier,
        );

        let cells_shown = match phase {
            Phase::MakeSpace
            | Phase::WriteMultiplicand
            | Phase::WriteMultiplier
            | Phase::DrawGrid => 0,
            Phase::MultiplyDigits => location.sub_index + 1,
            Phase::AddDiagonals | Phase::WriteSolution => m * n,
        };
        let lattice = (phase >= Phase::DrawGrid).then(|| {
            solution.lattice().cells().map(|pos, cell| {
                Slot::reveal_if(pos.column_major_index(n) < cells_shown, *cell)
            })
        });

        let diagonals_shown = match phase {
            Phase::AddDiagonals => location.sub_index + 1,
            Phase::WriteSolution => m + n,
            _ => 0,
        };
        let diagonals = solution.diagonals()[..diagonals_shown].to_vec();

        let mut totals_bottom = vec![Slot::Hidden; m];
        let mut totals_left = vec![Slot::Hidden; n];
        let mut carry_right = vec![Slot::Hidden; n - 1];
        let mut carry_top = vec![Slot::Hidden; m];
        for diagonal in &diagonals {
            match diagonal.total_slot() {
                TotalSlot::Bottom(i) => totals_bottom[i] = Slot::Revealed(diagonal.digit()),
                TotalSlot::Left(i) => totals_left[i] = Slot::Revealed(diagonal.digit()),
            }
            match diagonal.carry_slot() {
                Some(CarrySlot::Right(i)) => carry_right[i] = Slot::Revealed(diagonal.carry_out()),
                Some(CarrySlot::Top(i)) => carry_top[i] = Slot::Revealed(diagonal.carry_out()),
                None => {}
            }
        }

        let solution = Slot::reveal_if(phase == Phase::WriteSolution, solution.product().clone());

        Self {
            index,
            location,
            multiplicand,
            multiplier,
            lattice,
            carry_top,
            carry_right,
            totals_bottom,
            totals_left,
            diagonals,
            solution,
        }
    }

    /// Returns the phase of this step.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.location.phase
    }

    /// Returns the diagonal summed at this step, if this is an
    /// [`Phase::AddDiagonals`] step.
    #[must_use]
    pub fn current_diagonal(&self) -> Option<&Diagonal> {
        self.phase()
            .is_add_diagonals()
            .then(|| self.diagonals.last())
            .flatten()
    }
}

fn reveal_all(digits: &[Digit], shown: bool) -> Vec<Slot<Digit>> {
    digits
        .iter()
        .map(|&digit| Slot::reveal_if(shown, digit))
        .collect()
}

#[cfg(test)]
mod tests {
    use lattice_core::{Operand, Position};

    use super::*;
    use crate::PhaseTable;

    fn steps(a: u64, b: u64) -> Vec<Step> {
        let solution = LatticeSolution::solve(Operand::new(a).unwrap(), Operand::new(b).unwrap());
        let table = PhaseTable::new(solution.columns(), solution.rows());
        (0..table.total_steps())
            .map(|index| Step::build(&solution, index, table.locate(index).unwrap()))
            .collect()
    }

    fn revealed<T: Copy>(slots: &[Slot<T>]) -> Vec<Option<T>> {
        slots.iter().map(|slot| slot.revealed()).collect()
    }

    #[test]
    fn test_operands_are_written_one_edge_at_a_time() {
        let steps = steps(321, 12);
        assert!(steps[0].multiplicand.iter().all(|s| s.is_hidden()));
        assert!(steps[0].multiplier.iter().all(|s| s.is_hidden()));
        assert!(steps[0].lattice.is_none());

        assert_eq!(
            revealed(&steps[1].multiplicand),
            [Some(Digit::D3), Some(Digit::D2), Some(Digit::D1)]
        );
        assert!(steps[1].multiplier.iter().all(|s| s.is_hidden()));

        assert_eq!(
            revealed(&steps[2].multiplier),
            [Some(Digit::D1), Some(Digit::D2)]
        );
        assert!(steps[2].lattice.is_none());
    }

    #[test]
    fn test_draw_grid_shows_empty_cells() {
        let steps = steps(321, 12);
        let grid = steps[3].lattice.as_ref().unwrap();
        assert_eq!((grid.columns(), grid.rows()), (3, 2));
        assert!(grid.iter().all(|(_, slot)| slot.is_hidden()));
        assert_eq!(steps[3].carry_right.len(), 1);
        assert_eq!(steps[3].carry_top.len(), 3);
    }

    #[test]
    fn test_cells_fill_in_column_major_order() {
        let steps = steps(321, 12);
        // Sub-step 1 is (col 0, row 1): 3 * 2 = 06
        let grid = steps[5].lattice.as_ref().unwrap();
        assert_eq!(
            grid[Position::new(0, 1)],
            Slot::Revealed(Cell {
                tens: Digit::D0,
                ones: Digit::D6
            })
        );
        assert!(grid[Position::new(0, 0)].is_revealed());
        assert!(grid[Position::new(1, 0)].is_hidden());
        assert_eq!(grid.iter().filter(|(_, slot)| slot.is_revealed()).count(), 2);
    }

    #[test]
    fn test_diagonals_reveal_totals_and_carries() {
        let steps = steps(99, 99);
        // 4 setup steps, 4 cells, then the first diagonal
        let first = &steps[8];
        assert_eq!(first.diagonals.len(), 1);
        assert_eq!(first.current_diagonal().map(Diagonal::sum), Some(1));
        assert_eq!(revealed(&first.totals_bottom), [None, Some(Digit::D1)]);
        assert_eq!(revealed(&first.carry_right), [Some(0)]);
        assert!(first.carry_top.iter().all(|s| s.is_hidden()));

        let second = &steps[9];
        assert_eq!(second.current_diagonal().map(Diagonal::sum), Some(10));
        assert_eq!(revealed(&second.totals_bottom), [Some(Digit::D0), Some(Digit::D1)]);
        assert_eq!(revealed(&second.carry_top), [None, Some(1)]);
    }

    #[test]
    fn test_final_step_shows_everything() {
        let steps = steps(123, 45);
        let last = steps.last().unwrap();
        assert!(last.phase().is_write_solution());
        assert!(last.current_diagonal().is_none());
        assert_eq!(last.diagonals.len(), 5);
        assert!(last.totals_bottom.iter().all(|s| s.is_revealed()));
        assert!(last.totals_left.iter().all(|s| s.is_revealed()));
        assert!(last.carry_top.iter().all(|s| s.is_revealed()));
        assert_eq!(
            last.solution.as_revealed().map(ProductDigits::value),
            Some(Some(5535))
        );
        assert!(steps[steps.len() - 2].solution.is_hidden());
    }
}
