//! Rodio-backed playback (feature `playback`).

use std::io::Cursor;
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use rodio::{Decoder, OutputStream, Sink};
use tracing::{debug, warn};

use super::sink::{AudioSink, PlayToken, Tokens};
use crate::tts::AudioOutput;
use crate::{Error, Result};

enum Command {
    Play(AudioOutput),
    Stop,
    /// Block the worker until the current sound finishes, then ack.
    Drain(mpsc::Sender<()>),
    Shutdown,
}

/// Plays through the default output device. A dedicated thread owns the
/// output stream (it is not `Send`); commands arrive over a channel.
/// A new sound stops and releases the previous one before taking the slot.
pub struct RodioSink {
    tokens: Tokens,
    tx: Sender<Command>,
    worker: Option<JoinHandle<()>>,
}

impl RodioSink {
    /// Spawn the playback thread, failing early when no output device exists.
    pub fn spawn() -> Result<Self> {
        let (tx, rx) = mpsc::channel::<Command>();
        let (ready_tx, ready_rx) = mpsc::channel::<std::result::Result<(), String>>();

        let worker = thread::spawn(move || {
            let (_stream, handle) = match OutputStream::try_default() {
                Ok(pair) => {
                    let _ = ready_tx.send(Ok(()));
                    pair
                }
                Err(e) => {
                    let _ = ready_tx.send(Err(e.to_string()));
                    return;
                }
            };

            let mut current: Option<Sink> = None;
            while let Ok(cmd) = rx.recv() {
                match cmd {
                    Command::Play(audio) => {
                        if let Some(old) = current.take() {
                            old.stop();
                        }
                        let sink = match Sink::try_new(&handle) {
                            Ok(s) => s,
                            Err(e) => {
                                warn!("audio sink unavailable: {e}");
                                continue;
                            }
                        };
                        match Decoder::new(Cursor::new(audio.data)) {
                            Ok(source) => {
                                sink.append(source);
                                current = Some(sink);
                            }
                            Err(e) => warn!("undecodable audio payload: {e}"),
                        }
                    }
                    Command::Stop => {
                        if let Some(old) = current.take() {
                            old.stop();
                        }
                    }
                    Command::Drain(ack) => {
                        if let Some(sink) = current.take() {
                            sink.sleep_until_end();
                        }
                        let _ = ack.send(());
                    }
                    Command::Shutdown => break,
                }
            }
        });

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self {
                tokens: Tokens::default(),
                tx,
                worker: Some(worker),
            }),
            Ok(Err(reason)) => Err(Error::configuration(format!(
                "no audio output device: {reason}"
            ))),
            Err(_) => Err(Error::configuration("playback thread died during startup")),
        }
    }

    /// Block until the currently playing sound (if any) runs out.
    pub fn wait_until_done(&self) {
        let (ack_tx, ack_rx) = mpsc::channel();
        if self.tx.send(Command::Drain(ack_tx)).is_ok() {
            let _ = ack_rx.recv();
        }
    }
}

impl AudioSink for RodioSink {
    fn begin(&self) -> PlayToken {
        self.tokens.claim()
    }

    fn play(&self, token: PlayToken, audio: AudioOutput) {
        if !self.tokens.is_current(token) {
            debug!("stale playback dropped");
            return;
        }
        let _ = self.tx.send(Command::Play(audio));
    }

    fn stop(&self) {
        let _ = self.tx.send(Command::Stop);
    }
}

impl Drop for RodioSink {
    fn drop(&mut self) {
        let _ = self.tx.send(Command::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
