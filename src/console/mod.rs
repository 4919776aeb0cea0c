//! Controller and presentation-surface abstraction.
//!
//! The page the original tool rendered into becomes a [`Surface`]: named
//! input fields, output panels, and action buttons, plus a notification
//! channel. [`Console`] drives the wire clients from user actions and
//! writes each outcome into exactly one slot.

mod controller;
mod surface;
mod terminal;

pub use controller::{Console, SpeechAction, TextSource, DOWNLOAD_FILENAME};
pub use surface::{Button, ButtonState, Field, MemorySurface, Panel, Surface, OUTPUT_PLACEHOLDER};
pub use terminal::TerminalSurface;
