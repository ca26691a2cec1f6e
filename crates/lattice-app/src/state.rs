use std::time::Duration;

use lattice_core::Operand;
use lattice_generator::OperandGenerator;
use lattice_lesson::{Lesson, Narration};

use crate::{
    autoplay::{AutoplaySlot, AutoplayTimer},
    i18n::Translator,
    playback::{DisplayMode, Playback, PlaybackAction},
    reveal::RevealSchedule,
    session::{self, OperandInput, SessionParams},
    settings::Settings,
    surface::{Clipboard, Frame, ShareError, StepView},
};

/// The mutable state of the app.
///
/// The lesson is recomputed whenever an operand changes and is never mutated
/// in place. The playback record and the autoplay timer are the only other
/// moving parts; the timer runs exactly while the playback is playing.
#[derive(Debug)]
pub struct AppState {
    settings: Settings,
    generator: OperandGenerator,
    multiplicand: OperandInput,
    multiplier: OperandInput,
    lesson: Option<Lesson>,
    playback: Playback,
    autoplay: AutoplaySlot,
}

impl AppState {
    /// Creates the state with the default operands.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let (a, b) = settings.default_operands;
        let generator = OperandGenerator::new(settings.randomize_range.clone()).unwrap_or_else(|err| {
            log::warn!("{err}; using the default randomize range");
            OperandGenerator::default()
        });
        let mut state = Self {
            settings,
            generator,
            multiplicand: OperandInput::new(a.to_string()),
            multiplier: OperandInput::new(b.to_string()),
            lesson: None,
            playback: Playback::new(0),
            autoplay: AutoplaySlot::default(),
        };
        state.recompute();
        state
    }

    /// Creates the state and applies the parameters of a page query string.
    ///
    /// Operands come first, so the step index is checked against the
    /// restored lesson. Unusable parameters keep the defaults.
    #[must_use]
    pub fn restore(settings: Settings, params: &SessionParams) -> Self {
        let mut state = Self::new(settings);
        if let Some(input) = &params.multiplicand {
            state.multiplicand = input.clone();
        }
        if let Some(input) = &params.multiplier {
            state.multiplier = input.clone();
        }
        state.recompute();
        if let Some(mode) = params.mode {
            state.apply_playback(PlaybackAction::SetMode(mode));
        }
        if let Some(step) = params.step {
            if step <= state.playback.last_index() && state.lesson.is_some() {
                state.apply_playback(PlaybackAction::ScrubTo(step));
            } else {
                log::warn!("ignoring step {} outside the lesson", step + 1);
            }
        }
        log::info!(
            "session restored: {} x {}, mode={}, step={}",
            state.multiplicand.text(),
            state.multiplier.text(),
            state.playback.mode(),
            state.playback.index() + 1,
        );
        state
    }

    /// Returns the settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the multiplicand field.
    #[must_use]
    pub fn multiplicand(&self) -> &OperandInput {
        &self.multiplicand
    }

    /// Returns the multiplier field.
    #[must_use]
    pub fn multiplier(&self) -> &OperandInput {
        &self.multiplier
    }

    /// Returns the current lesson, if both operands are valid.
    #[must_use]
    pub fn lesson(&self) -> Option<&Lesson> {
        self.lesson.as_ref()
    }

    /// Returns the playback record.
    #[must_use]
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    /// Returns `true` while the autoplay timer is running.
    #[must_use]
    pub fn is_autoplay_timer_running(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Returns the time until the next autoplay tick, if the timer runs.
    #[must_use]
    pub fn autoplay_until_next_tick(&self) -> Option<Duration> {
        self.autoplay.timer().map(AutoplayTimer::until_next_tick)
    }

    /// Replaces the multiplicand text.
    pub fn set_multiplicand(&mut self, text: String) {
        self.multiplicand = OperandInput::new(text);
        self.recompute();
    }

    /// Replaces the multiplier text.
    pub fn set_multiplier(&mut self, text: String) {
        self.multiplier = OperandInput::new(text);
        self.recompute();
    }

    /// Replaces both operands.
    pub fn set_operands(&mut self, multiplicand: Operand, multiplier: Operand) {
        self.multiplicand = multiplicand.into();
        self.multiplier = multiplier.into();
        self.recompute();
    }

    /// Replaces both operands with a random pair.
    pub fn randomize(&mut self) {
        let pair = self.generator.generate();
        log::debug!("randomized operands with seed {}", pair.seed);
        self.set_operands(pair.multiplicand, pair.multiplier);
    }

    /// Applies a playback transition and starts or cancels the timer to
    /// match.
    ///
    /// Navigation is ignored while there is no lesson.
    pub fn apply_playback(&mut self, action: PlaybackAction) {
        if self.lesson.is_none() && !action.is_set_mode() {
            return;
        }
        let before = self.playback;
        self.playback = before.transition(action);
        if self.playback != before {
            log::debug!("{action:?}: {before:?} -> {:?}", self.playback);
        }
        self.autoplay
            .sync(self.playback.is_playing(), self.settings.playback.interval);
    }

    /// Advances the autoplay clock by `dt`.
    pub fn advance_time(&mut self, dt: Duration) {
        for _ in 0..self.autoplay.advance(dt) {
            self.apply_playback(PlaybackAction::Tick);
            if !self.playback.is_playing() {
                break;
            }
        }
    }

    /// Returns the share link for the current state, or `None` without a
    /// lesson.
    #[must_use]
    pub fn share_url(&self) -> Option<String> {
        let lesson = self.lesson.as_ref()?;
        let solution = lesson.solution();
        Some(session::share_url(
            &self.settings.share_base_url,
            solution.multiplicand(),
            solution.multiplier(),
            self.playback.mode(),
            self.playback.index(),
        ))
    }

    /// Copies the share link to `clipboard` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError::NoSolution`] without a lesson, or the clipboard
    /// error if copying failed.
    pub fn share(&self, clipboard: &mut dyn Clipboard) -> Result<String, ShareError> {
        let url = self.share_url().ok_or(ShareError::NoSolution)?;
        clipboard.write_text(&url)?;
        log::info!("share link copied: {url}");
        Ok(url)
    }

    /// Builds what the rendering surface should show.
    #[must_use]
    pub fn frame(&self, translator: &dyn Translator) -> Frame {
        let Some(lesson) = &self.lesson else {
            return Frame::NoSolution;
        };
        let view = |index: usize| {
            let step = lesson.step(index)?;
            Some(StepView {
                label: translator.narrate(&Narration::step_label(index)),
                narration: translator.narrate(&lesson.narrate(&step)),
                step,
            })
        };
        let views = match self.playback.mode() {
            DisplayMode::SingleStep => view(self.playback.index()).into_iter().collect(),
            DisplayMode::AllSteps => (0..lesson.len()).filter_map(view).collect(),
        };
        let solution = lesson.solution();
        Frame::Lesson {
            mode: self.playback.mode(),
            playing: self.playback.is_playing(),
            controls: self.playback.controls(),
            views,
            schedule: RevealSchedule::new(
                solution.columns(),
                solution.rows(),
                self.settings.reveal,
            ),
        }
    }

    fn recompute(&mut self) {
        self.lesson = match (self.multiplicand.value(), self.multiplier.value()) {
            (Some(a), Some(b)) => {
                let lesson = Lesson::new(a, b);
                log::debug!(
                    "solved {a} x {b} = {}, {} steps",
                    lesson.solution().product(),
                    lesson.len()
                );
                Some(lesson)
            }
            _ => {
                log::debug!("no solution until both operands are positive integers");
                None
            }
        };
        // Without a lesson the old bounds are kept for when one comes back.
        let last_index = self
            .lesson
            .as_ref()
            .map_or(self.playback.last_index(), Lesson::last_index);
        self.playback = self
            .playback
            .transition(PlaybackAction::Relayout { last_index });
        self.autoplay.cancel();
    }
}
