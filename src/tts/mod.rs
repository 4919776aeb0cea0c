//! Speech-synthesis wire client and audio types.

mod client;
mod types;

pub use client::{TtsClient, TtsClientBuilder};
pub use types::{AudioFormat, AudioOutput, SpeechRequest, Voice};
