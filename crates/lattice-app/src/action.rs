use std::mem;

use crate::playback::DisplayMode;

/// A user or host request handled by the app.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Action {
    /// Advance one step.
    Next,
    /// Go back one step.
    Previous,
    /// Go to the first step.
    Reset,
    /// Go to the last step.
    JumpToEnd,
    /// Start or stop autoplay.
    ToggleAutoplay,
    /// Go to a 0-based step index.
    ScrubTo(usize),
    /// Switch to the given display mode.
    SetDisplayMode(DisplayMode),
    /// Switch between single-step and all-steps mode.
    ToggleDisplayMode,
    /// The multiplicand field changed.
    SetMultiplicand(String),
    /// The multiplier field changed.
    SetMultiplier(String),
    /// Replace both operands with random ones.
    Randomize,
    /// Copy a share link to the clipboard.
    Share,
}

/// Actions requested since the last update.
#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    /// Queues `action`.
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Removes and returns every queued action, oldest first.
    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::Next);
        queue.request(Action::SetMultiplier("12".to_owned()));
        assert!(!queue.is_empty());

        let drained = queue.take_all();
        assert_eq!(drained, [Action::Next, Action::SetMultiplier("12".to_owned())]);

        assert!(queue.take_all().is_empty());
        assert!(queue.is_empty());
    }
}
