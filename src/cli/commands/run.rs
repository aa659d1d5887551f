use anyhow::{Context, Result};
use std::path::PathBuf;

use super::{load_config_file, open_store};
use crate::cache::{CacheManager, CachedTranslator};
use crate::chat::{ChatSession, SessionConfig};
use crate::config::{ResolveOptions, ResolvedConfig, resolve_config};
use crate::relay::{Relay, ReplyFormat, Router};
use crate::translation::{BackoffTranslator, TranslationClient, Translator};

pub struct RunOptions {
    pub config: Option<PathBuf>,
    pub resolve: ResolveOptions,
    pub contact: String,
    pub quiet: bool,
}

pub async fn run_relay(options: RunOptions) -> Result<()> {
    let config_file = load_config_file(options.config.as_deref())?;
    let config = resolve_config(&options.resolve, &config_file)?;

    let relay = build_relay(&config)?;
    tracing::info!(
        provider = %config.provider_name,
        model = %config.model,
        default_language = %config.relay.default_language,
        preferences = %config.relay.preferences_path.display(),
        "relay is ready"
    );

    let session_config = SessionConfig {
        provider_name: config.provider_name,
        endpoint: config.endpoint,
        model: config.model,
        default_language: config.relay.default_language,
        preferences_path: config.relay.preferences_path,
        contact: options.contact,
        spinner: !options.quiet,
    };
    let mut session = ChatSession::new(session_config, relay);
    session.run().await
}

/// Wires the preference store and the translator chain into a [`Relay`].
///
/// The store is read once up front so a corrupt preferences file stops the
/// bot at startup instead of failing every message.
pub fn build_relay(config: &ResolvedConfig) -> Result<Relay> {
    let settings = &config.relay;

    let store = open_store(settings)?;
    let preferences = store.load().with_context(|| {
        format!(
            "Cannot start with the preferences at {}",
            settings.preferences_path.display()
        )
    })?;
    tracing::debug!(overrides = preferences.len(), "loaded language preferences");

    let client = TranslationClient::new(
        config.endpoint.clone(),
        config.model.clone(),
        config.api_key.clone(),
    );
    let namespace = client.cache_namespace();
    let backoff = BackoffTranslator::new(client, settings.retry);
    tracing::debug!(
        max_attempts = backoff.policy().max_attempts,
        worst_case_wait_ms = backoff.policy().worst_case_wait().as_millis() as u64,
        "translation retry policy"
    );

    let translator: Box<dyn Translator> = if settings.cache {
        match CacheManager::new() {
            Ok(cache) => Box::new(CachedTranslator::new(backoff, cache, namespace)),
            Err(e) => {
                tracing::warn!(error = %e, "translation cache unavailable, continuing without it");
                Box::new(backoff)
            }
        }
    } else {
        Box::new(backoff)
    };

    Ok(Relay::new(
        Router::new(settings.default_language.as_str(), settings.marker.as_str()),
        ReplyFormat::new(settings.marker.as_str(), settings.styling.as_str()),
        store,
        translator,
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{ConfigFile, resolve_relay_settings};
    use crate::relay::ChatMessage;
    use serial_test::serial;
    use tempfile::TempDir;

    fn resolved(temp_dir: &TempDir) -> ResolvedConfig {
        let options = ResolveOptions {
            preferences: Some(temp_dir.path().join("userPreferences.json")),
            ..ResolveOptions::default()
        };
        ResolvedConfig {
            relay: resolve_relay_settings(&options, &ConfigFile::default()).unwrap(),
            provider_name: "local".to_string(),
            endpoint: "http://127.0.0.1:9".to_string(),
            model: "test-model".to_string(),
            api_key: None,
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_unusable_cache_dir_does_not_stop_relay() {
        let temp_dir = TempDir::new().unwrap();
        let not_a_dir = temp_dir.path().join("cachefile");
        std::fs::write(&not_a_dir, "").unwrap();

        let original = std::env::var("XDG_CACHE_HOME").ok();
        unsafe { std::env::set_var("XDG_CACHE_HOME", &not_a_dir) };

        let relay = build_relay(&resolved(&temp_dir));

        match original {
            Some(val) => unsafe { std::env::set_var("XDG_CACHE_HOME", val) },
            None => unsafe { std::env::remove_var("XDG_CACHE_HOME") },
        }

        let relay = relay.unwrap();
        let outcome = relay
            .handle(&ChatMessage::outgoing("me", "b@c.us", "set language spanish"))
            .await;
        assert_eq!(
            outcome.reply.as_deref(),
            Some("🤖 *Language set to spanish.*")
        );
    }

    #[test]
    fn test_malformed_preferences_stop_startup() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("userPreferences.json"), "{ nope").unwrap();
        let mut config = resolved(&temp_dir);
        config.relay.cache = false;

        let err = build_relay(&config).err().unwrap();

        assert!(matches!(
            err.downcast_ref::<crate::preferences::PreferenceError>(),
            Some(crate::preferences::PreferenceError::Malformed { .. })
        ));
    }
}
