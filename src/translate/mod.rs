//! Machine translation of source strings into sibling languages.

mod languages;
mod openai;

use async_trait::async_trait;
use thiserror::Error;

pub use languages::{infer_language, language_name};
pub use openai::{OpenAiTranslator, clean_response};

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("no OpenAI API key configured")]
    MissingApiKey,
    #[error("nothing to translate")]
    EmptyText,
    #[error("invalid OpenAI API key")]
    Unauthorized,
    #[error("translation API temporarily unavailable ({status}), please try again later")]
    Transient { status: u16 },
    #[error("translation API error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("invalid translation API base URL: {0}")]
    InvalidEndpoint(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected translation API response: {0}")]
    MalformedResponse(String),
}

impl TranslateError {
    /// The API rejected the credentials; no further requests should be made
    /// with them.
    pub fn is_auth(&self) -> bool {
        matches!(self, TranslateError::Unauthorized)
    }
}

#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source_lang` to `target_lang` (language codes).
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError>;
}
