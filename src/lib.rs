//! # voxlate
//!
//! Client runtime for a translation / text-to-speech backend. The backend is
//! an opaque collaborator exposing two routes, `POST /translate` (JSON in,
//! JSON out) and `POST /tts` (JSON in, binary audio out), plus a couple of
//! helper routes (`/detect-language`, `/voices`). This crate provides typed
//! wire clients for those routes and a console layer that drives them from
//! user actions, rendering results into named presentation slots.
//!
//! ## Overview
//!
//! - [`TranslateClient`] and [`TtsClient`] speak the wire contract and map
//!   failures into the crate's error taxonomy.
//! - [`Console`] is the controller: it reads inputs from a [`Surface`]
//!   (named fields, panels, buttons), issues one request per user action,
//!   and writes the outcome back into exactly one slot.
//! - [`AudioSink`] is the shared single-slot playback target; concurrent
//!   speech requests race for it and the newest request wins.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use voxlate::{ServiceConfig, TranslateClient};
//!
//! #[tokio::main]
//! async fn main() -> voxlate::Result<()> {
//!     let config = ServiceConfig::from_env();
//!     let client = TranslateClient::builder()
//!         .base_url(&config.base_url)
//!         .build()?;
//!
//!     let translated = client.translate("Good morning", "fr").await?;
//!     println!("{translated}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`translate`] | Translation and language-detection wire client |
//! | [`tts`] | Speech-synthesis wire client and audio types |
//! | [`console`] | Controller and presentation-surface abstraction |
//! | [`audio`] | Shared playback slot (trait + implementations) |
//! | [`transport`] | HTTP plumbing shared by the wire clients |
//! | [`config`] | Service configuration and the language table |
//! | [`clipboard`] | Best-effort system clipboard access |

pub mod audio;
pub mod clipboard;
pub mod config;
pub mod console;
pub mod translate;
pub mod transport;
pub mod tts;

// Re-export main types for convenience
pub use audio::{AudioSink, MemorySink, PlayToken};
pub use config::{Language, ServiceConfig};
pub use console::{
    Button, Console, Field, MemorySurface, Panel, SpeechAction, Surface, TerminalSurface,
    TextSource,
};
pub use translate::{Detection, TranslateClient, TranslateClientBuilder};
pub use tts::{AudioFormat, AudioOutput, SpeechRequest, TtsClient, TtsClientBuilder, Voice};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
