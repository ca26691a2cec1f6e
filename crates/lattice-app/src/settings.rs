use std::{ops::RangeInclusive, time::Duration};

use lattice_generator::OperandGenerator;

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Autoplay behaviour.
    pub playback: PlaybackSettings,
    /// Operands shown before the learner types anything.
    pub default_operands: (u64, u64),
    /// Page address that share links point to, without a query string.
    pub share_base_url: String,
    /// Range the randomize action draws operands from.
    pub randomize_range: RangeInclusive<u64>,
    /// Animation delays handed to the rendering surface.
    pub reveal: RevealTiming,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playback: PlaybackSettings::default(),
            default_operands: (321, 12),
            share_base_url: "http://localhost/".to_owned(),
            randomize_range: OperandGenerator::DEFAULT_RANGE,
            reveal: RevealTiming::default(),
        }
    }
}

/// Autoplay settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSettings {
    /// Time between two autoplay advances.
    pub interval: Duration,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1000),
        }
    }
}

/// Base delays of the reveal animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    /// Delay unit for operand digits, grid edges and the grid body.
    pub unit: Duration,
    /// Delay between consecutive inner grid lines.
    pub line_stagger: Duration,
    /// Delay between consecutive cell-diagonal segments.
    pub diagonal_stagger: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            unit: Duration::from_millis(100),
            line_stagger: Duration::from_millis(50),
            diagonal_stagger: Duration::from_millis(50),
        }
    }
}
