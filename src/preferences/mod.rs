//! Per-contact language preferences.
//!
//! The map only ever holds overrides: an entry equal to the default language
//! is removed on write, so "no entry" and "entry == default" mean the same
//! thing everywhere else. Callers reload the map for every message and save it
//! right after each mutation; the backing store is the single source of truth.

mod json;
mod memory;
mod sqlite;

use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

pub use json::{DEFAULT_PREFERENCES_PATH, JsonFileStore};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Contact id -> language code. Ordered so the persisted file is stable.
pub type Preferences = BTreeMap<String, String>;

/// Errors raised by a preference backend.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to access preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not hold a contact -> language object.
    #[error("preferences file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize preferences: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("preference database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Load/save contract for preference persistence.
pub trait PreferenceStore: Send + Sync {
    /// Reads the persisted map. A store that has never been written is empty.
    fn load(&self) -> Result<Preferences, PreferenceError>;

    /// Replaces the persisted map wholesale.
    fn save(&self, preferences: &Preferences) -> Result<(), PreferenceError>;
}

/// Removes `contact`'s entry if it equals `default_language`.
///
/// Returns `true` if an entry was removed.
pub fn delete_if_default(
    preferences: &mut Preferences,
    contact: &str,
    default_language: &str,
) -> bool {
    if preferences.get(contact).is_some_and(|lang| lang == default_language) {
        preferences.remove(contact);
        tracing::info!(contact, "deleted entry set to the default language");
        true
    } else {
        false
    }
}

/// Records `language` for `contact`, then normalizes the entry away if it is
/// the default language.
pub fn set_language(
    preferences: &mut Preferences,
    contact: &str,
    language: &str,
    default_language: &str,
) {
    preferences.insert(contact.to_string(), language.to_string());
    delete_if_default(preferences, contact, default_language);
}
