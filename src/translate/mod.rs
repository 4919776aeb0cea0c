//! Translation and language-detection wire client.

mod client;
mod types;

pub use client::{TranslateClient, TranslateClientBuilder};
pub use types::{Detection, TranslationReply, TranslationRequest};
