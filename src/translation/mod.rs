//! Translation backends and the retry policy wrapped around them.

mod backoff;
mod client;
mod language;
mod prompt;
mod sse_parser;

use async_trait::async_trait;
use thiserror::Error;

pub use backoff::{BackoffTranslator, RetryPolicy};
pub use client::TranslationClient;
pub use language::{SUPPORTED_LANGUAGES, print_languages, resolve_language, validate_language};
pub use prompt::SYSTEM_PROMPT_TEMPLATE;

/// Failure of a translation call.
///
/// Only [`TranslateError::Transient`] is worth retrying; every other kind is
/// final for the message at hand.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslateError {
    /// Network-level failure (connection refused, timeout, overloaded server).
    #[error("network error: {0}")]
    Transient(String),

    #[error("unsupported language: '{0}'")]
    UnsupportedLanguage(String),

    /// The provider answered but refused the request.
    #[error("translation rejected: {0}")]
    Rejected(String),

    #[error("translation provider returned no text")]
    EmptyResponse,

    /// Every attempt failed with a transient error.
    #[error("translation failed after {attempts} attempts: {last_error}")]
    Exhausted {
        attempts: u32,
        last_error: Box<TranslateError>,
    },
}

impl TranslateError {
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

/// Something that turns text into `target_language`.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target_language: &str)
    -> Result<String, TranslateError>;
}

#[async_trait]
impl<T: Translator + ?Sized> Translator for Box<T> {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslateError> {
        (**self).translate(text, target_language).await
    }
}
