//! Translation cache.

mod sqlite;

use async_trait::async_trait;

pub use sqlite::{CacheKey, CacheManager};

use crate::translation::{TranslateError, Translator};

/// Serves repeated translations from the cache and records fresh ones.
///
/// Cache failures are logged and bypassed; they never fail a translation.
pub struct CachedTranslator<T> {
    inner: T,
    cache: CacheManager,
    namespace: String,
}

impl<T: Translator> CachedTranslator<T> {
    pub const fn new(inner: T, cache: CacheManager, namespace: String) -> Self {
        Self {
            inner,
            cache,
            namespace,
        }
    }
}

#[async_trait]
impl<T: Translator> Translator for CachedTranslator<T> {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslateError> {
        let key = CacheKey::new(text, target_language, &self.namespace);

        match self.cache.get(&key) {
            Ok(Some(cached)) => {
                tracing::debug!(target_language, "translation served from cache");
                return Ok(cached);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "translation cache lookup failed"),
        }

        let translated = self.inner.translate(text, target_language).await?;

        if let Err(e) = self.cache.put(&key, &translated) {
            tracing::warn!(error = %e, "failed to store translation in cache");
        }

        Ok(translated)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    struct CountingTranslator {
        calls: AtomicUsize,
        result: Result<String, TranslateError>,
    }

    #[async_trait]
    impl Translator for CountingTranslator {
        async fn translate(
            &self,
            _text: &str,
            _target_language: &str,
        ) -> Result<String, TranslateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn cached(
        temp_dir: &TempDir,
        result: Result<String, TranslateError>,
    ) -> CachedTranslator<CountingTranslator> {
        let cache = CacheManager::open(temp_dir.path().join("translations.db")).unwrap();
        let inner = CountingTranslator {
            calls: AtomicUsize::new(0),
            result,
        };
        CachedTranslator::new(inner, cache, "http://localhost:11434#gemma3".to_string())
    }

    #[tokio::test]
    async fn test_second_call_is_served_from_cache() {
        let temp_dir = TempDir::new().unwrap();
        let translator = cached(&temp_dir, Ok("Hola".to_string()));

        assert_eq!(translator.translate("Hello", "spanish").await.unwrap(), "Hola");
        assert_eq!(translator.translate("Hello", "spanish").await.unwrap(), "Hola");

        assert_eq!(translator.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_other_language_misses_cache() {
        let temp_dir = TempDir::new().unwrap();
        let translator = cached(&temp_dir, Ok("translated".to_string()));

        translator.translate("Hello", "spanish").await.unwrap();
        translator.translate("Hello", "french").await.unwrap();

        assert_eq!(translator.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let temp_dir = TempDir::new().unwrap();
        let translator = cached(&temp_dir, Err(TranslateError::EmptyResponse));

        assert!(translator.translate("Hello", "spanish").await.is_err());
        assert!(translator.translate("Hello", "spanish").await.is_err());

        assert_eq!(translator.inner.calls.load(Ordering::SeqCst), 2);
    }
}
