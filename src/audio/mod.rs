//! Shared playback slot.
//!
//! All speech operations play through one [`AudioSink`]. The slot hands out
//! monotonic [`PlayToken`]s so that when requests overlap, the newest
//! request owns the slot and stale completions are dropped instead of
//! overwriting fresher audio.

mod sink;

pub use sink::{AudioSink, MemorySink, PlayToken};

#[cfg(feature = "playback")]
mod playback;

#[cfg(feature = "playback")]
pub use playback::RodioSink;
