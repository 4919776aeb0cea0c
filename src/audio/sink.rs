use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::tts::AudioOutput;

/// Claim ticket for the shared playback slot. Claim with
/// [`AudioSink::begin`] *before* issuing the synthesis request, so a newer
/// request supersedes this one even when it completes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayToken(u64);

/// Newest-claim-wins bookkeeping shared by sink implementations.
#[derive(Debug, Default)]
pub(crate) struct Tokens(AtomicU64);

impl Tokens {
    pub fn claim(&self) -> PlayToken {
        PlayToken(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: PlayToken) -> bool {
        self.0.load(Ordering::SeqCst) == token.0
    }
}

/// The single shared playback target. Playing replaces (and releases)
/// whatever occupied the slot before.
pub trait AudioSink: Send + Sync {
    /// Claim the slot; the newest claim wins.
    fn begin(&self) -> PlayToken;

    /// Start playing `audio` if `token` is still the newest claim,
    /// otherwise drop the audio silently.
    fn play(&self, token: PlayToken, audio: AudioOutput);

    /// Stop and release whatever is playing.
    fn stop(&self);
}

/// In-memory sink: records what was played instead of making sound.
/// Useful in tests and as the slot for builds without the `playback`
/// feature.
#[derive(Debug, Default)]
pub struct MemorySink {
    tokens: Tokens,
    current: Mutex<Option<AudioOutput>>,
    history: Mutex<Vec<AudioOutput>>,
    discarded: AtomicU64,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything that made it into the slot, oldest first.
    pub fn played(&self) -> Vec<AudioOutput> {
        self.history.lock().unwrap().clone()
    }

    /// The audio currently occupying the slot, if any.
    pub fn current(&self) -> Option<AudioOutput> {
        self.current.lock().unwrap().clone()
    }

    /// How many completions arrived too late and were dropped.
    pub fn discarded(&self) -> u64 {
        self.discarded.load(Ordering::SeqCst)
    }
}

impl AudioSink for MemorySink {
    fn begin(&self) -> PlayToken {
        self.tokens.claim()
    }

    fn play(&self, token: PlayToken, audio: AudioOutput) {
        if !self.tokens.is_current(token) {
            self.discarded.fetch_add(1, Ordering::SeqCst);
            return;
        }
        *self.current.lock().unwrap() = Some(audio.clone());
        self.history.lock().unwrap().push(audio);
    }

    fn stop(&self) {
        self.current.lock().unwrap().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tts::AudioFormat;

    fn audio(byte: u8) -> AudioOutput {
        AudioOutput {
            data: vec![byte; 4],
            format: AudioFormat::Mp3,
        }
    }

    #[test]
    fn newest_claim_wins() {
        let sink = MemorySink::new();
        let first = sink.begin();
        let second = sink.begin();

        // The older request completes last but must not take the slot.
        sink.play(second, audio(2));
        sink.play(first, audio(1));

        assert_eq!(sink.played().len(), 1);
        assert_eq!(sink.current().unwrap().data, vec![2; 4]);
        assert_eq!(sink.discarded(), 1);
    }

    #[test]
    fn stop_releases_the_slot() {
        let sink = MemorySink::new();
        let token = sink.begin();
        sink.play(token, audio(7));
        sink.stop();
        assert!(sink.current().is_none());
        assert_eq!(sink.played().len(), 1);
    }
}
