use lattice_core::Operand;
use lattice_solver::LatticeSolution;

use crate::{Narration, PhaseTable, Step};

/// A worked lattice multiplication broken into replayable steps.
///
/// The solution is computed once in [`Lesson::new`]; every step is derived
/// from it on demand and depends only on the operands and the step index.
///
/// # Examples
///
/// ```
/// use lattice_core::Operand;
/// use lattice_lesson::{Lesson, Phase};
///
/// let lesson = Lesson::new(Operand::try_from(321)?, Operand::try_from(12)?);
/// assert_eq!(lesson.len(), 16);
///
/// let last = lesson.step(lesson.last_index()).unwrap();
/// assert_eq!(last.phase(), Phase::WriteSolution);
/// assert!(lesson.step(lesson.len()).is_none());
/// # Ok::<(), lattice_core::OperandError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Lesson {
    solution: LatticeSolution,
    table: PhaseTable,
}

impl Lesson {
    /// Solves `multiplicand x multiplier` and lays out its steps.
    #[must_use]
    pub fn new(multiplicand: Operand, multiplier: Operand) -> Self {
        Self::from_solution(LatticeSolution::solve(multiplicand, multiplier))
    }

    /// Lays out the steps of an existing solution.
    #[must_use]
    pub fn from_solution(solution: LatticeSolution) -> Self {
        let table = PhaseTable::new(solution.columns(), solution.rows());
        Self { solution, table }
    }

    /// Returns the underlying solution.
    #[must_use]
    pub fn solution(&self) -> &LatticeSolution {
        &self.solution
    }

    /// Returns the phase boundaries.
    #[must_use]
    pub fn phases(&self) -> &PhaseTable {
        &self.table
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.total_steps()
    }

    /// Always `false`; every lesson has at least the setup steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the index of the final step.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.table.last_index()
    }

    /// Returns the snapshot at `index`, or `None` past the last step.
    #[must_use]
    pub fn step(&self, index: usize) -> Option<Step> {
        let location = self.table.locate(index)?;
        Some(Step::build(&self.solution, index, location))
    }

    /// Returns every step in order.
    pub fn steps(&self) -> impl Iterator<Item = Step> + '_ {
        (0..self.len()).filter_map(|index| self.step(index))
    }

    /// Returns the narration of the step at `index`.
    #[must_use]
    pub fn narration(&self, index: usize) -> Option<Narration> {
        let step = self.step(index)?;
        Some(self.narrate(&step))
    }

    /// Returns the narration of `step`.
    #[must_use]
    pub fn narrate(&self, step: &Step) -> Narration {
        Narration::for_step(
            step,
            self.solution.multiplicand().value(),
            self.solution.multiplier().value(),
        )
    }
}

#[cfg(test)]
mod tests {
    use lattice_core::{Digit, Position, Slot};
    use proptest::prelude::*;

    use super::*;
    use crate::Phase;

    fn lesson(a: u64, b: u64) -> Lesson {
        Lesson::new(Operand::new(a).unwrap(), Operand::new(b).unwrap())
    }

    #[test]
    fn test_step_count_123_by_45() {
        let lesson = lesson(123, 45);
        assert_eq!(lesson.len(), PhaseTable::WRITE_SOLUTION_OFFSET + 6 + 5);
        assert_eq!(lesson.steps().count(), lesson.len());
        assert!(!lesson.is_empty());
    }

    #[test]
    fn test_steps_match_random_access() {
        let lesson = lesson(4_321, 98);
        for (index, step) in lesson.steps().enumerate() {
            assert_eq!(step.index, index);
            assert_eq!(Some(step), lesson.step(index));
        }
    }

    #[test]
    fn test_scenario_123_by_45() {
        let lesson = lesson(123, 45);
        let last = lesson.step(lesson.last_index()).unwrap();
        let digits = |slots: &[Slot<Digit>]| -> Vec<u8> {
            slots
                .iter()
                .filter_map(|slot| slot.revealed())
                .map(Digit::value)
                .collect()
        };
        assert_eq!(digits(&last.multiplicand), [1, 2, 3]);
        assert_eq!(digits(&last.multiplier), [4, 5]);
        let cell = last.lattice.as_ref().unwrap()[Position::new(2, 1)];
        assert_eq!(cell.revealed().map(|c| c.product()), Some(15));
        assert_eq!(last.solution.as_revealed().unwrap().to_string(), "5535");
    }

    proptest! {
        #[test]
        fn reveals_only_grow(a in 1_u64..100_000, b in 1_u64..10_000) {
            let lesson = lesson(a, b);
            let steps: Vec<_> = lesson.steps().collect();
            for pair in steps.windows(2) {
                let (before, after) = (&pair[0], &pair[1]);
                prop_assert!(before.phase() <= after.phase());
                let count = |step: &Step| {
                    step.lattice
                        .as_ref()
                        .map_or(0, |grid| grid.iter().filter(|(_, s)| s.is_revealed()).count())
                };
                prop_assert!(count(before) <= count(after));
                prop_assert!(before.diagonals.len() <= after.diagonals.len());
            }
            let last = steps.last().unwrap();
            prop_assert_eq!(last.phase(), Phase::WriteSolution);
            prop_assert_eq!(
                last.solution.as_revealed().and_then(|p| p.value()),
                Some(u128::from(a) * u128::from(b))
            );
        }

        #[test]
        fn step_count_is_stable(a in 1_u64..=u64::MAX, b in 1_u64..=u64::MAX) {
            let first = lesson(a, b);
            let second = lesson(a, b);
            let (m, n) = (first.solution().columns(), first.solution().rows());
            prop_assert_eq!(first.len(), second.len());
            prop_assert_eq!(first.len(), PhaseTable::WRITE_SOLUTION_OFFSET + m * n + m + n);
        }
    }
}
