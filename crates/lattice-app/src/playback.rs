//! Playback state and its transitions.
//!
//! [`Playback`] is the single mutable record of the lesson view: the current
//! step, whether autoplay is running, and the display mode. Every change goes
//! through [`Playback::transition`], a pure function from the old state and a
//! [`PlaybackAction`] to the new state.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// How steps are shown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum DisplayMode {
    /// Only the current step, with navigation controls.
    #[default]
    SingleStep,
    /// Every step in sequence, without controls.
    AllSteps,
}

impl DisplayMode {
    /// Returns the value used for the `mode` query parameter.
    #[must_use]
    pub const fn as_query_value(self) -> &'static str {
        match self {
            Self::SingleStep => "one",
            Self::AllSteps => "all",
        }
    }

    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::SingleStep => Self::AllSteps,
            Self::AllSteps => Self::SingleStep,
        }
    }
}

/// Error returned for an unrecognized display mode.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown display mode: {value:?}")]
pub struct DisplayModeParseError {
    /// The rejected text.
    pub value: String,
}

impl FromStr for DisplayMode {
    type Err = DisplayModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one" => Ok(Self::SingleStep),
            "all" => Ok(Self::AllSteps),
            _ => Err(DisplayModeParseError {
                value: s.to_owned(),
            }),
        }
    }
}

impl Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

/// An input to [`Playback::transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlaybackAction {
    /// Advance one step.
    Next,
    /// Go back one step.
    Previous,
    /// Go to the first step.
    Reset,
    /// Go to the last step.
    JumpToEnd,
    /// Go to an absolute step; out-of-range indices are ignored.
    ScrubTo(usize),
    /// Start or stop autoplay.
    ToggleAutoplay,
    /// One autoplay interval elapsed.
    Tick,
    /// Switch the display mode.
    SetMode(DisplayMode),
    /// The lesson was replaced by one whose last step is at the given index.
    Relayout {
        /// Last step index of the new lesson.
        last_index: usize,
    },
}

/// Which navigation controls are enabled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::struct_excessive_bools)]
pub struct Controls {
    /// Go to the first step.
    pub reset: bool,
    /// Go back one step.
    pub previous: bool,
    /// Start or stop autoplay.
    pub play_pause: bool,
    /// Advance one step.
    pub next: bool,
    /// Go to the last step.
    pub jump_to_end: bool,
}

/// The lesson view state.
///
/// # Examples
///
/// ```
/// use lattice_app::playback::{Playback, PlaybackAction};
///
/// let playback = Playback::new(15)
///     .transition(PlaybackAction::JumpToEnd)
///     .transition(PlaybackAction::Previous);
/// assert_eq!(playback.index(), 14);
///
/// // Autoplay stops by itself on the last step.
/// let playback = playback
///     .transition(PlaybackAction::ToggleAutoplay)
///     .transition(PlaybackAction::Tick);
/// assert_eq!(playback.index(), 15);
/// assert!(!playback.is_playing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Playback {
    index: usize,
    last_index: usize,
    playing: bool,
    mode: DisplayMode,
}

impl Playback {
    /// Creates a stopped single-step playback at step 0.
    #[must_use]
    pub const fn new(last_index: usize) -> Self {
        Self {
            index: 0,
            last_index,
            playing: false,
            mode: DisplayMode::SingleStep,
        }
    }

    /// Returns the current step index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the last valid step index.
    #[must_use]
    pub const fn last_index(&self) -> usize {
        self.last_index
    }

    /// Returns `true` while autoplay is running.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Returns the display mode.
    #[must_use]
    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Returns `true` on the final step.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.index == self.last_index
    }

    /// Applies `action` and returns the resulting state.
    #[must_use]
    pub fn transition(self, action: PlaybackAction) -> Self {
        let stopped = Self {
            playing: false,
            ..self
        };
        match action {
            PlaybackAction::Next => Self {
                index: (self.index + 1).min(self.last_index),
                ..stopped
            },
            PlaybackAction::Previous => Self {
                index: self.index.saturating_sub(1),
                ..stopped
            },
            PlaybackAction::Reset => Self { index: 0, ..stopped },
            PlaybackAction::JumpToEnd => Self {
                index: self.last_index,
                ..stopped
            },
            PlaybackAction::ScrubTo(index) if index <= self.last_index => {
                Self { index, ..stopped }
            }
            PlaybackAction::ScrubTo(_) => stopped,
            PlaybackAction::ToggleAutoplay => Self {
                playing: !self.playing && !self.is_at_end() && self.mode.is_single_step(),
                ..self
            },
            PlaybackAction::Tick if self.playing => {
                let index = (self.index + 1).min(self.last_index);
                Self {
                    index,
                    playing: index < self.last_index,
                    ..self
                }
            }
            PlaybackAction::Tick => self,
            PlaybackAction::SetMode(mode) => Self {
                mode,
                playing: self.playing && mode.is_single_step(),
                ..self
            },
            PlaybackAction::Relayout { last_index } => Self {
                index: self.index.min(last_index),
                last_index,
                ..stopped
            },
        }
    }

    /// Returns the controls enabled in this state.
    #[must_use]
    pub fn controls(&self) -> Controls {
        if self.mode.is_all_steps() {
            return Controls::default();
        }
        let has_previous = self.index > 0;
        let has_next = self.index < self.last_index;
        Controls {
            reset: has_previous,
            previous: has_previous && !self.playing,
            play_pause: has_next,
            next: has_next && !self.playing,
            jump_to_end: has_next && !self.playing,
        }
    }
}
