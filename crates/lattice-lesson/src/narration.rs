//! What the lesson says at each step.
//!
//! Narration is returned as a message key plus named variables, leaving the
//! wording to a translation layer.

use std::fmt::{self, Display};

use lattice_core::Position;

use crate::{Phase, Step};

/// Identifier of a narration message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// The "Step N" label.
    Step,
    /// Clear space on the page.
    MakeSpace,
    /// Write the multiplicand along the top.
    WriteMultiplicand,
    /// Write the multiplier along the right side.
    WriteMultiplier,
    /// Draw the grid.
    DrawGrid,
    /// Multiply one pair of digits.
    MultiplyDigits,
    /// Add the digits on one diagonal.
    AddDiagonalDigits,
    /// Read off the product.
    WriteSolution,
}

impl MessageKey {
    /// All keys.
    pub const ALL: [Self; 8] = [
        Self::Step,
        Self::MakeSpace,
        Self::WriteMultiplicand,
        Self::WriteMultiplier,
        Self::DrawGrid,
        Self::MultiplyDigits,
        Self::AddDiagonalDigits,
        Self::WriteSolution,
    ];

    /// Returns the catalog identifier of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Step => "step",
            Self::MakeSpace => "makeSpace",
            Self::WriteMultiplicand => "writeMultiplicand",
            Self::WriteMultiplier => "writeMultiplier",
            Self::DrawGrid => "drawGrid",
            Self::MultiplyDigits => "multiplyDigits",
            Self::AddDiagonalDigits => "addDiagonalDigits",
            Self::WriteSolution => "writeSolution",
        }
    }
}

impl Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message key with the values to interpolate into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    /// The message to show.
    pub key: MessageKey,
    /// Named values, in the order they were added.
    pub vars: Vec<(&'static str, String)>,
}

impl Narration {
    /// Creates a narration without variables.
    #[must_use]
    pub fn new(key: MessageKey) -> Self {
        Self {
            key,
            vars: Vec::new(),
        }
    }

    /// Adds a named variable.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.vars.push((name, value.to_string()));
        self
    }

    /// Returns the value of variable `name`.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the "Step N" label for a 0-based step index.
    #[must_use]
    pub fn step_label(index: usize) -> Self {
        Self::new(MessageKey::Step).with("number", index + 1)
    }

    /// Describes what happens at `step`.
    ///
    /// `multiplicand` and `multiplier` are the operand values as the learner
    /// typed them.
    #[must_use]
    pub fn for_step(step: &Step, multiplicand: u64, multiplier: u64) -> Self {
        match step.phase() {
            Phase::MakeSpace => Self::new(MessageKey::MakeSpace),
            Phase::WriteMultiplicand => {
                Self::new(MessageKey::WriteMultiplicand).with("multiplicand", multiplicand)
            }
            Phase::WriteMultiplier => {
                Self::new(MessageKey::WriteMultiplier).with("multiplier", multiplier)
            }
            Phase::DrawGrid => Self::new(MessageKey::DrawGrid)
                .with("columns", step.multiplicand.len())
                .with("multiplicand", multiplicand)
                .with("rows", step.multiplier.len())
                .with("multiplier", multiplier),
            Phase::MultiplyDigits => {
                let mut narration = Self::new(MessageKey::MultiplyDigits);
                let rows = step.multiplier.len();
                let pos = Position::from_column_major(step.location.sub_index, rows);
                let left = step.multiplicand.get(pos.col).and_then(|s| s.revealed());
                let right = step.multiplier.get(pos.row).and_then(|s| s.revealed());
                let cell = step
                    .lattice
                    .as_ref()
                    .and_then(|grid| grid.get(pos))
                    .and_then(|s| s.revealed());
                if let (Some(left), Some(right), Some(cell)) = (left, right, cell) {
                    narration = narration
                        .with("left", left)
                        .with("right", right)
                        .with("product", cell);
                }
                narration
            }
            Phase::AddDiagonals => {
                let mut narration = Self::new(MessageKey::AddDiagonalDigits);
                if let Some(diagonal) = step.current_diagonal() {
                    let addends = diagonal
                        .terms()
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" + ");
                    narration = narration
                        .with("addends", addends)
                        .with("sum", diagonal.sum());
                }
                narration
            }
            Phase::WriteSolution => {
                let solution = step
                    .solution
                    .as_revealed()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                Self::new(MessageKey::WriteSolution).with("solution", solution)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use lattice_core::Operand;

    use super::*;
    use crate::Lesson;

    fn narrations(a: u64, b: u64) -> Vec<Narration> {
        let lesson = Lesson::new(Operand::new(a).unwrap(), Operand::new(b).unwrap());
        (0..lesson.len())
            .map(|index| lesson.narration(index).unwrap())
            .collect()
    }

    #[test]
    fn test_key_names() {
        assert_eq!(MessageKey::AddDiagonalDigits.as_str(), "addDiagonalDigits");
        assert_eq!(MessageKey::MakeSpace.to_string(), "makeSpace");
    }

    #[test]
    fn test_setup_narration() {
        let all = narrations(321, 12);
        assert_eq!(all[0], Narration::new(MessageKey::MakeSpace));
        assert_eq!(all[1].var("multiplicand"), Some("321"));
        assert_eq!(all[2].var("multiplier"), Some("12"));
        assert_eq!(all[3].key, MessageKey::DrawGrid);
        assert_eq!(all[3].var("columns"), Some("3"));
        assert_eq!(all[3].var("rows"), Some("2"));
    }

    #[test]
    fn test_multiply_and_add_narration() {
        let all = narrations(321, 12);
        // (col 0, row 1): 3 * 2
        assert_eq!(all[5].key, MessageKey::MultiplyDigits);
        assert_eq!(all[5].var("left"), Some("3"));
        assert_eq!(all[5].var("right"), Some("2"));
        assert_eq!(all[5].var("product"), Some("06"));

        // Second diagonal of 321 x 12, starting with the carry from the first
        let second = &all[4 + 6 + 1];
        assert_eq!(second.key, MessageKey::AddDiagonalDigits);
        assert_eq!(second.var("addends"), Some("0 + 1 + 0 + 4"));
        assert_eq!(second.var("sum"), Some("5"));
    }

    #[test]
    fn test_solution_narration() {
        let all = narrations(123, 45);
        let last = all.last().unwrap();
        assert_eq!(last.key, MessageKey::WriteSolution);
        assert_eq!(last.var("solution"), Some("5535"));
        assert_eq!(Narration::step_label(0).var("number"), Some("1"));
    }
}
