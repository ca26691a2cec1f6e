//! Interactive lattice multiplication lessons.
//!
//! [`LatticeApp`] holds the two operand fields, the lesson computed from
//! them, and the playback position. The host forwards input as
//! [`Action`]s, calls [`LatticeApp::update`] with the elapsed time, and
//! draws the resulting [`Frame`] on its [`RenderSurface`].
//!
//! Sessions can be restored from a page query string
//! (`?a=321&b=12&mode=one&step=2`) and shared back as a link.

pub use self::{
    action::Action,
    app::{Host, LatticeApp},
    i18n::{EnglishCatalog, Translator},
    input::KeyPress,
    playback::{DisplayMode, Playback, PlaybackAction},
    settings::Settings,
    surface::{Clipboard, Frame, MemoryClipboard, RenderSurface, StepView},
    version::build_version,
};

pub mod action;
pub mod action_handler;
pub mod app;
pub mod autoplay;
pub mod i18n;
pub mod input;
pub mod playback;
pub mod reveal;
pub mod session;
pub mod settings;
pub mod state;
pub mod surface;
pub mod version;
