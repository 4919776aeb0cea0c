use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, error};

use super::surface::{Button, ButtonState, Field, Panel, Surface, OUTPUT_PLACEHOLDER};
use crate::audio::AudioSink;
use crate::clipboard;
use crate::config::{normalize_speech_lang, ServiceConfig};
use crate::translate::TranslateClient;
use crate::transport::HttpTransport;
use crate::tts::{AudioOutput, SpeechRequest, TtsClient};
use crate::{Error, Result};

/// Default filename for downloaded speech audio.
pub const DOWNLOAD_FILENAME: &str = "speech.mp3";

const MSG_ENTER_TEXT: &str = "Please enter text.";
const MSG_ENTER_SPEECH_TEXT: &str = "Please enter some text to speak.";
const MSG_TRANSLATING: &str = "Translating...";
const MSG_PROCESSING: &str = "Processing...";
const MSG_NETWORK: &str = "Network Error";
const MSG_TTS_FAILED: &str = "Error generating audio";
const MSG_TTS_NETWORK: &str = "Network error";
const MSG_SAVE_FAILED: &str = "Could not save audio file";

/// Where the text for a read-aloud request comes from: an input field's
/// value or a display panel's rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    Field(Field),
    Panel(Panel),
}

/// What to do with synthesized speech.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechAction {
    /// Play through the shared audio slot.
    Play,
    /// Save to disk instead of playing.
    Download { path: PathBuf },
}

impl SpeechAction {
    pub fn download_default() -> Self {
        Self::Download {
            path: PathBuf::from(DOWNLOAD_FILENAME),
        }
    }

    fn button(&self) -> Button {
        match self {
            Self::Play => Button::Speak,
            Self::Download { .. } => Button::Download,
        }
    }
}

/// The controller. Each operation is an independent, stateless round trip:
/// read inputs from the surface, issue one request, write the outcome into
/// exactly one slot. Overlapping invocations are allowed; the translation
/// panel and the audio slot carry generations so a stale completion never
/// overwrites a newer one.
pub struct Console {
    translate: TranslateClient,
    tts: TtsClient,
    surface: Arc<dyn Surface>,
    sink: Arc<dyn AudioSink>,
    config: ServiceConfig,
    translate_gen: AtomicU64,
}

impl Console {
    pub fn new(
        config: ServiceConfig,
        surface: Arc<dyn Surface>,
        sink: Arc<dyn AudioSink>,
    ) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            translate: TranslateClient::new(transport.clone()),
            tts: TtsClient::new(transport),
            surface,
            sink,
            config,
            translate_gen: AtomicU64::new(0),
        })
    }

    pub fn surface(&self) -> &Arc<dyn Surface> {
        &self.surface
    }

    pub fn translate_client(&self) -> &TranslateClient {
        &self.translate
    }

    pub fn tts_client(&self) -> &TtsClient {
        &self.tts
    }

    /// Translate the input field into the target language and render the
    /// result into the output panel.
    ///
    /// The returned error mirrors what was already rendered; embedders may
    /// use it for exit codes, the surface has seen everything it needs.
    pub async fn translate_text(&self) -> Result<()> {
        let text = self.surface.field_value(Field::TranslateInput);
        let target = self.surface.field_value(Field::TargetLang);

        if text.trim().is_empty() {
            self.surface.notify(MSG_ENTER_TEXT);
            return Err(Error::validation(MSG_ENTER_TEXT));
        }

        let generation = self.translate_gen.fetch_add(1, Ordering::SeqCst) + 1;
        self.surface.set_panel_text(Panel::TranslationOutput, MSG_TRANSLATING);

        let outcome = self.translate.translate(&text, &target).await;

        if self.translate_gen.load(Ordering::SeqCst) != generation {
            // A newer translation owns the panel now.
            debug!(generation, "stale translation discarded");
            return Ok(());
        }

        match outcome {
            Ok(translated) => {
                self.surface.set_panel_text(Panel::TranslationOutput, &translated);
                Ok(())
            }
            Err(err) => {
                let rendered = match &err {
                    Error::Api { message, .. } => format!("Error: {message}"),
                    _ => MSG_NETWORK.to_string(),
                };
                self.surface.set_panel_text(Panel::TranslationOutput, &rendered);
                Err(err)
            }
        }
    }

    /// Read text aloud through the shared audio slot, without any busy UI.
    ///
    /// Skips silently when there is nothing to speak (empty text or the
    /// output panel's placeholder). Failures are logged, never surfaced;
    /// this path fires from read-aloud affordances where an alert would be
    /// noise.
    pub async fn speak_inline(&self, source: TextSource, lang_field: Field) {
        let text = match source {
            TextSource::Field(field) => self.surface.field_value(field),
            TextSource::Panel(panel) => self.surface.panel_text(panel),
        };
        if text.is_empty() || text == OUTPUT_PLACEHOLDER {
            return;
        }

        let lang = normalize_speech_lang(
            &self.surface.field_value(lang_field),
            &self.config.default_speech_lang,
        );

        // Claim before the request: a newer speech request supersedes this
        // one even if this one finishes first.
        let token = self.sink.begin();
        match self.tts.synthesize(&SpeechRequest::new(text, lang)).await {
            Ok(audio) => self.sink.play(token, audio),
            Err(err) => error!("inline speech failed: {err}"),
        }
    }

    /// Synthesize the speech input field and either play the audio or save
    /// it to disk. The action's button shows a busy label and is disabled
    /// for the call's duration; its original state is restored on every
    /// exit path.
    pub async fn speak_with_controls(&self, action: SpeechAction) -> Result<()> {
        let text = self.surface.field_value(Field::SpeechInput);
        let lang = self.surface.field_value(Field::SpeechLang);

        if text.trim().is_empty() {
            self.surface.notify(MSG_ENTER_SPEECH_TEXT);
            return Err(Error::validation(MSG_ENTER_SPEECH_TEXT));
        }

        let _guard = ButtonBusyGuard::engage(Arc::clone(&self.surface), action.button());

        let request = SpeechRequest::new(text, lang);
        match action {
            SpeechAction::Play => {
                // Claim before the request so a newer speech request
                // supersedes this one even if this one finishes first.
                let token = self.sink.begin();
                let audio = self.synthesize_notified(&request).await?;
                self.sink.play(token, audio);
                Ok(())
            }
            SpeechAction::Download { path } => {
                let audio = self.synthesize_notified(&request).await?;
                if let Err(err) = audio.save(&path) {
                    self.surface.notify(MSG_SAVE_FAILED);
                    return Err(err);
                }
                Ok(())
            }
        }
    }

    /// Synthesize, notifying the user on failure before handing the error
    /// back to the caller.
    async fn synthesize_notified(&self, request: &SpeechRequest) -> Result<AudioOutput> {
        match self.tts.synthesize(request).await {
            Ok(audio) => Ok(audio),
            Err(err) => {
                let message = match &err {
                    Error::Api { .. } => MSG_TTS_FAILED,
                    _ => MSG_TTS_NETWORK,
                };
                self.surface.notify(message);
                Err(err)
            }
        }
    }

    /// Copy a panel's rendered text to the system clipboard. No feedback
    /// either way.
    pub fn copy_panel(&self, panel: Panel) {
        let text = self.surface.panel_text(panel);
        clipboard::copy_text(&text);
    }
}

/// Scoped busy state for an action button: swaps in a busy label and
/// disables the button, restoring the saved state on drop.
struct ButtonBusyGuard {
    surface: Arc<dyn Surface>,
    button: Button,
    saved: ButtonState,
}

impl ButtonBusyGuard {
    fn engage(surface: Arc<dyn Surface>, button: Button) -> Self {
        let saved = surface.button(button);
        surface.set_button(
            button,
            ButtonState {
                label: MSG_PROCESSING.to_string(),
                enabled: false,
            },
        );
        Self {
            surface,
            button,
            saved,
        }
    }
}

impl Drop for ButtonBusyGuard {
    fn drop(&mut self) {
        self.surface.set_button(self.button, self.saved.clone());
    }
}
