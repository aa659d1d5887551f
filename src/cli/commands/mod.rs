//! Subcommand implementations.

/// Preference management command handler.
pub mod prefs;

/// Provider listing command handler.
pub mod providers;

/// Console relay command handler.
pub mod run;

use anyhow::Result;
use std::path::Path;

use crate::config::{ConfigFile, ConfigManager, RelaySettings, StoreKind};
use crate::preferences::{JsonFileStore, PreferenceStore, SqliteStore};

/// Loads the config file from `path`, or from the default location.
pub fn load_config_file(path: Option<&Path>) -> Result<ConfigFile> {
    let manager = match path {
        Some(p) => ConfigManager::with_path(p.to_path_buf()),
        None => ConfigManager::new()?,
    };
    manager.load_or_default()
}

/// Opens the preference backend selected in `settings`.
pub fn open_store(settings: &RelaySettings) -> Result<Box<dyn PreferenceStore>> {
    let store: Box<dyn PreferenceStore> = match settings.store {
        StoreKind::Json => Box::new(JsonFileStore::new(&settings.preferences_path)),
        StoreKind::Sqlite => Box::new(SqliteStore::open(&settings.preferences_path)?),
    };
    Ok(store)
}
