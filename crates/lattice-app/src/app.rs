//! The lattice lesson controller.
//!
//! # Design Notes
//! - The host drives the app: it forwards input as [`Action`]s or
//!   [`KeyPress`]es and calls [`LatticeApp::update`] once per frame with the
//!   elapsed time.
//! - Each update advances autoplay, handles the queued actions, and renders
//!   one [`Frame`].
//! - Drawing, translation, and the clipboard are supplied by the host.

use std::time::Duration;

use crate::{
    action::{Action, ActionRequestQueue},
    action_handler,
    i18n::Translator,
    input::{self, KeyPress},
    session::SessionParams,
    settings::Settings,
    state::AppState,
    surface::{Clipboard, Frame, RenderSurface},
};

/// Collaborators supplied by the host for one update.
pub struct Host<'a> {
    /// Where frames are drawn.
    pub surface: &'a mut dyn RenderSurface,
    /// Message lookup.
    pub translator: &'a dyn Translator,
    /// Where share links go.
    pub clipboard: &'a mut dyn Clipboard,
}

/// The lesson controller.
#[derive(Debug)]
pub struct LatticeApp {
    app_state: AppState,
    action_queue: ActionRequestQueue,
}

impl LatticeApp {
    /// Creates the app with the default operands.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            app_state: AppState::new(settings),
            action_queue: ActionRequestQueue::default(),
        }
    }

    /// Creates the app from the page query string (or full URL).
    #[must_use]
    pub fn from_query(settings: Settings, query: &str) -> Self {
        let params = SessionParams::parse(query);
        Self {
            app_state: AppState::restore(settings, &params),
            action_queue: ActionRequestQueue::default(),
        }
    }

    /// Returns the app state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.app_state
    }

    /// Queues an action for the next update.
    pub fn request(&mut self, action: Action) {
        self.action_queue.request(action);
    }

    /// Queues the action bound to a key, if any.
    pub fn key_pressed(&mut self, press: KeyPress) {
        input::handle_key(press, &mut self.action_queue);
    }

    /// Advances time by `dt`, handles queued actions, and renders.
    ///
    /// Returns the frame that was rendered.
    pub fn update(&mut self, dt: Duration, host: &mut Host<'_>) -> Frame {
        self.app_state.advance_time(dt);
        action_handler::handle_all(&mut self.app_state, host.clipboard, &mut self.action_queue);

        let frame = self.app_state.frame(host.translator);
        host.surface.render(&frame);
        frame
    }

    /// Returns the time until autoplay next advances, if it is running.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.app_state.autoplay_until_next_tick()
    }
}
