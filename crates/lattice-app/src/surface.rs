//! Interfaces to the outside world: the rendering surface and the clipboard.

use lattice_lesson::Step;

use crate::{
    playback::{Controls, DisplayMode},
    reveal::RevealSchedule,
};

/// One step as the surface should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    /// Translated "Step N" label.
    pub label: String,
    /// Translated narration.
    pub narration: String,
    /// What is written on the lattice at this step.
    pub step: Step,
}

/// Everything the surface draws in one update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// At least one operand is not a positive integer; no lesson is shown.
    NoSolution,
    /// A lesson view.
    Lesson {
        /// Current display mode.
        mode: DisplayMode,
        /// `true` while autoplay runs.
        playing: bool,
        /// Enabled controls; all disabled in all-steps mode.
        controls: Controls,
        /// The current step in single-step mode, or every step in all-steps
        /// mode.
        views: Vec<StepView>,
        /// Animation delays for the lattice size.
        schedule: RevealSchedule,
    },
}

/// Draws frames.
pub trait RenderSurface {
    /// Draws `frame`, replacing whatever was shown before.
    fn render(&mut self, frame: &Frame);
}

/// Error reported by a [`Clipboard`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("clipboard unavailable: {reason}")]
pub struct ClipboardError {
    /// Why the write failed.
    pub reason: String,
}

/// Receives share links.
pub trait Clipboard {
    /// Places `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] if the text could not be copied.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Error returned by the share action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ShareError {
    /// There is no valid operand pair to share.
    #[display("nothing to share: both operands must be positive integers")]
    NoSolution,
    /// The clipboard rejected the link.
    #[display("failed to copy share link")]
    Clipboard(ClipboardError),
}

/// A clipboard that keeps the last text written to it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryClipboard {
    /// The last text written, if any.
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}
