use crate::{
    action::{Action, ActionRequestQueue},
    playback::PlaybackAction,
    state::AppState,
    surface::Clipboard,
};

/// Handles every queued action in order.
pub fn handle_all(
    app_state: &mut AppState,
    clipboard: &mut dyn Clipboard,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, clipboard, action);
    }
}

/// Handles one action.
pub fn handle(app_state: &mut AppState, clipboard: &mut dyn Clipboard, action: Action) {
    match action {
        Action::Next => app_state.apply_playback(PlaybackAction::Next),
        Action::Previous => app_state.apply_playback(PlaybackAction::Previous),
        Action::Reset => app_state.apply_playback(PlaybackAction::Reset),
        Action::JumpToEnd => app_state.apply_playback(PlaybackAction::JumpToEnd),
        Action::ToggleAutoplay => app_state.apply_playback(PlaybackAction::ToggleAutoplay),
        Action::ScrubTo(index) => app_state.apply_playback(PlaybackAction::ScrubTo(index)),
        Action::SetDisplayMode(mode) => app_state.apply_playback(PlaybackAction::SetMode(mode)),
        Action::ToggleDisplayMode => {
            let mode = app_state.playback().mode().toggled();
            app_state.apply_playback(PlaybackAction::SetMode(mode));
        }
        Action::SetMultiplicand(text) => app_state.set_multiplicand(text),
        Action::SetMultiplier(text) => app_state.set_multiplier(text),
        Action::Randomize => app_state.randomize(),
        Action::Share => {
            if let Err(err) = app_state.share(clipboard) {
                log::warn!("{err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        playback::DisplayMode,
        settings::Settings,
        surface::{ClipboardError, MemoryClipboard},
    };

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError {
                reason: "denied".to_owned(),
            })
        }
    }

    fn run(actions: impl IntoIterator<Item = Action>) -> (AppState, MemoryClipboard) {
        let mut state = AppState::new(Settings::default());
        let mut clipboard = MemoryClipboard::default();
        let mut queue = ActionRequestQueue::default();
        for action in actions {
            queue.request(action);
        }
        handle_all(&mut state, &mut clipboard, &mut queue);
        (state, clipboard)
    }

    #[test]
    fn test_navigation_actions() {
        let (state, _) = run([Action::Next, Action::Next, Action::Previous]);
        assert_eq!(state.playback().index(), 1);

        let (state, _) = run([Action::JumpToEnd]);
        assert_eq!(state.playback().index(), 15);

        let (state, _) = run([Action::ScrubTo(7), Action::Reset]);
        assert_eq!(state.playback().index(), 0);
    }

    #[test]
    fn test_operand_change_keeps_index_in_range() {
        let (state, _) = run([
            Action::JumpToEnd,
            Action::SetMultiplicand("3".to_owned()),
            Action::SetMultiplier("4".to_owned()),
        ]);
        // 1 x 1 digits: 5 + 1 + 2 steps
        assert_eq!(state.playback().last_index(), 7);
        assert_eq!(state.playback().index(), 7);
    }

    #[test]
    fn test_invalid_operand_suppresses_lesson() {
        let (state, _) = run([Action::SetMultiplier("1x".to_owned()), Action::Next]);
        assert!(state.lesson().is_none());
        assert_eq!(state.multiplier().text(), "1x");
        assert_eq!(state.playback().index(), 0);
    }

    #[test]
    fn test_toggle_display_mode() {
        let (state, _) = run([Action::ToggleDisplayMode]);
        assert_eq!(state.playback().mode(), DisplayMode::AllSteps);
        let (state, _) = run([Action::ToggleDisplayMode, Action::ToggleDisplayMode]);
        assert_eq!(state.playback().mode(), DisplayMode::SingleStep);
    }

    #[test]
    fn test_share_writes_clipboard() {
        let (_, clipboard) = run([Action::Next, Action::Share]);
        assert_eq!(
            clipboard.contents.as_deref(),
            Some("http://localhost/?a=321&b=12&mode=one&step=2")
        );

        let (_, clipboard) = run([Action::SetMultiplicand(String::new()), Action::Share]);
        assert_eq!(clipboard.contents, None);
    }

    #[test]
    fn test_share_reports_clipboard_failure() {
        let state = AppState::new(Settings::default());
        let err = state.share(&mut BrokenClipboard).unwrap_err();
        assert!(matches!(err, crate::surface::ShareError::Clipboard(_)));
    }

    #[test]
    fn test_randomize_uses_configured_range() {
        let settings = Settings {
            randomize_range: 5..=5,
            ..Settings::default()
        };
        let mut state = AppState::new(settings);
        handle(&mut state, &mut MemoryClipboard::default(), Action::Randomize);
        assert_eq!(state.multiplicand().text(), "5");
        assert_eq!(state.multiplier().text(), "5");
        assert!(state.lesson().is_some());
    }
}
