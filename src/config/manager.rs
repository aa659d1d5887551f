use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use crate::paths;
use crate::preferences::DEFAULT_PREFERENCES_PATH;
use crate::relay::{DEFAULT_MARKER, DEFAULT_STYLING};
use crate::translation::{RetryPolicy, validate_language};

/// Default language of the controlling account when none is configured.
pub const DEFAULT_LANGUAGE: &str = "english";

const DEFAULT_SQLITE_PATH: &str = "./userPreferences.db";

/// Which backend keeps the preference map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Json,
    Sqlite,
}

/// Settings in the `[relay]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Language of the controlling account.
    pub default_language: Option<String>,
    /// Provider name used for translations.
    pub provider: Option<String>,
    /// Model name used for translations.
    pub model: Option<String>,
    /// Leading marker of every bot reply.
    pub marker: Option<String>,
    /// Delimiter wrapped around translated text.
    pub styling: Option<String>,
    #[serde(default)]
    pub store: StoreKind,
    /// Location of the preference file or database.
    pub preferences: Option<PathBuf>,
    pub max_attempts: Option<u32>,
    pub base_delay_ms: Option<u64>,
    /// Cache translations on disk.
    pub cache: Option<bool>,
}

/// Configuration for a translation provider.
///
/// Each provider has an endpoint and optional API key settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: String,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// List of available models for this provider.
    #[serde(default)]
    pub models: Vec<String>,
}

impl ProviderConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    /// Returns `true` if this provider requires an API key.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }
}

/// The complete configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub relay: RelayConfig,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

/// Relay settings after merging CLI arguments, config file and built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaySettings {
    pub default_language: String,
    pub marker: String,
    pub styling: String,
    pub store: StoreKind,
    pub preferences_path: PathBuf,
    pub retry: RetryPolicy,
    pub cache: bool,
}

/// Everything needed to run the relay against a provider.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub relay: RelaySettings,
    /// The selected provider name.
    pub provider_name: String,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use for translation.
    pub model: String,
    /// The API key (if required).
    pub api_key: Option<String>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub default_language: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub preferences: Option<PathBuf>,
    pub no_cache: bool,
}

/// Resolves the relay settings that do not depend on a provider.
///
/// # Errors
///
/// Returns an error if the default language is unknown, the marker is empty
/// or the retry attempt count is zero.
pub fn resolve_relay_settings(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<RelaySettings> {
    let relay = &config_file.relay;

    let default_language = options
        .default_language
        .as_ref()
        .or(relay.default_language.as_ref())
        .map_or_else(|| DEFAULT_LANGUAGE.to_string(), |l| l.to_lowercase());
    validate_language(&default_language)
        .with_context(|| "Invalid configuration: 'default_language'")?;

    let marker = relay
        .marker
        .clone()
        .unwrap_or_else(|| DEFAULT_MARKER.to_string());
    if marker.trim().is_empty() {
        bail!(
            "Invalid configuration: 'marker' must not be empty\n\n\
             The marker is how the bot recognises its own replies."
        );
    }

    let max_attempts = relay
        .max_attempts
        .unwrap_or(RetryPolicy::default().max_attempts);
    if max_attempts == 0 {
        bail!("Invalid configuration: 'max_attempts' must be at least 1");
    }
    let base_delay = relay
        .base_delay_ms
        .map_or(RetryPolicy::default().base_delay, Duration::from_millis);

    let preferences_path = options
        .preferences
        .clone()
        .or_else(|| relay.preferences.clone())
        .unwrap_or_else(|| match relay.store {
            StoreKind::Json => PathBuf::from(DEFAULT_PREFERENCES_PATH),
            StoreKind::Sqlite => PathBuf::from(DEFAULT_SQLITE_PATH),
        });

    Ok(RelaySettings {
        default_language,
        marker,
        styling: relay
            .styling
            .clone()
            .unwrap_or_else(|| DEFAULT_STYLING.to_string()),
        store: relay.store,
        preferences_path,
        retry: RetryPolicy::new(max_attempts, base_delay),
        cache: !options.no_cache && relay.cache.unwrap_or(true),
    })
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values.
///
/// # Errors
///
/// Returns an error if required configuration (provider, model) is missing,
/// the provider is not found, or the relay settings are invalid.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let relay = resolve_relay_settings(options, config_file)?;

    let provider_name = options
        .provider
        .as_ref()
        .or(config_file.relay.provider.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'provider'\n\n\
                 Please provide it via:\n  \
                 - CLI option: linguabot --provider <name>\n  \
                 - Config file: ~/.config/linguabot/config.toml"
            )
        })?;

    let provider_config = config_file.providers.get(&provider_name).ok_or_else(|| {
        let mut available: Vec<_> = config_file.providers.keys().map(String::as_str).collect();
        available.sort_unstable();
        if available.is_empty() {
            anyhow::anyhow!(
                "Provider '{provider_name}' not found\n\n\
                 No providers configured. Add providers to ~/.config/linguabot/config.toml"
            )
        } else {
            anyhow::anyhow!(
                "Provider '{provider_name}' not found\n\n\
                 Available providers:\n  \
                 - {}\n\n\
                 Add providers to ~/.config/linguabot/config.toml",
                available.join("\n  - ")
            )
        }
    })?;

    let model = options
        .model
        .as_ref()
        .or(config_file.relay.model.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'model'\n\n\
                 Please provide it via:\n  \
                 - CLI option: linguabot --model <name>\n  \
                 - Config file: ~/.config/linguabot/config.toml"
            )
        })?;

    if !provider_config.models.is_empty() && !provider_config.models.contains(&model) {
        tracing::warn!(
            model = %model,
            provider = %provider_name,
            configured = %provider_config.models.join(", "),
            "model is not in the configured models list, proceeding anyway"
        );
    }

    let api_key = provider_config.get_api_key();

    if provider_config.requires_api_key() && api_key.is_none() {
        let env_var = provider_config.api_key_env.as_deref().unwrap_or("API_KEY");
        bail!(
            "Provider '{provider_name}' requires an API key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/linguabot/config.toml"
        );
    }

    Ok(ResolvedConfig {
        relay,
        provider_name,
        endpoint: provider_config.endpoint.clone(),
        model,
        api_key,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a config manager for the default location.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/linguabot/config.toml`
    /// or `~/.config/linguabot/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the config file, treating a missing file as an empty one.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        match fs::metadata(&self.config_path) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ConfigFile::default()),
            _ => self.load(),
        }
    }
}
