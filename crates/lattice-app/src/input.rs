//! Keyboard shortcuts.

use crate::action::{Action, ActionRequestQueue};

/// A key press delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The character produced by the key.
    pub key: char,
    /// `true` if Ctrl (Windows/Linux) or Cmd (Mac) was held.
    pub command: bool,
}

impl KeyPress {
    /// A key pressed without modifiers.
    #[must_use]
    pub const fn plain(key: char) -> Self {
        Self {
            key,
            command: false,
        }
    }
}

struct Shortcut {
    key: char,
    action: Action,
}

impl Shortcut {
    const fn plain(key: char, action: Action) -> Self {
        Self { key, action }
    }
}

const SHORTCUTS: [Shortcut; 3] = [
    Shortcut::plain('j', Action::Previous),
    Shortcut::plain('k', Action::ToggleAutoplay),
    Shortcut::plain('l', Action::Next),
];

/// Queues the action bound to `press`, if any.
///
/// Returns `true` if the key was a shortcut.
pub fn handle_key(press: KeyPress, action_queue: &mut ActionRequestQueue) -> bool {
    if press.command {
        return false;
    }
    for shortcut in SHORTCUTS {
        if shortcut.key == press.key {
            action_queue.request(shortcut.action);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts() {
        let mut queue = ActionRequestQueue::default();
        for key in ['j', 'k', 'l', 'x', 'J'] {
            handle_key(KeyPress::plain(key), &mut queue);
        }
        assert_eq!(
            queue.take_all(),
            [Action::Previous, Action::ToggleAutoplay, Action::Next]
        );
    }

    #[test]
    fn test_modified_keys_are_ignored() {
        let mut queue = ActionRequestQueue::default();
        let press = KeyPress {
            key: 'l',
            command: true,
        };
        assert!(!handle_key(press, &mut queue));
        assert!(queue.is_empty());
    }
}
