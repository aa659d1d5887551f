use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{PreferenceError, PreferenceStore, Preferences};
use crate::fs::atomic_write;

/// Default location of the preferences file, relative to the working directory.
pub const DEFAULT_PREFERENCES_PATH: &str = "./userPreferences.json";

/// Preferences persisted as a pretty-printed JSON object.
///
/// The file is opened for each read and each write and closed right after.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_PREFERENCES_PATH)
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&self) -> Result<Preferences, PreferenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Preferences::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&contents).map_err(|source| PreferenceError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, preferences: &Preferences) -> Result<(), PreferenceError> {
        // serde_json pretty output uses a two-space indent
        let contents =
            serde_json::to_string_pretty(preferences).map_err(PreferenceError::Serialize)?;

        atomic_write(&self.path, &contents).map_err(|e| self.io_error(e))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store(temp_dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(temp_dir.path().join("userPreferences.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        let mut prefs = Preferences::new();
        prefs.insert("34600111222@c.us".to_string(), "spanish".to_string());
        prefs.insert("33611223344@c.us".to_string(), "french".to_string());

        store.save(&prefs).unwrap();
        assert_eq!(store.load().unwrap(), prefs);
    }

    #[test]
    fn test_saved_file_is_readable_json() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        let mut prefs = Preferences::new();
        prefs.insert("b@c.us".to_string(), "spanish".to_string());
        store.save(&prefs).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, "{\n  \"b@c.us\": \"spanish\"\n}");
    }

    #[test]
    fn test_save_empty_map_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        let mut prefs = Preferences::new();
        prefs.insert("b@c.us".to_string(), "spanish".to_string());
        store.save(&prefs).unwrap();
        store.save(&Preferences::new()).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        fs::write(store.path(), "{ not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, PreferenceError::Malformed { .. }));
    }

    #[test]
    fn test_load_wrong_shape_is_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        fs::write(store.path(), r#"{"b@c.us": 3}"#).unwrap();

        assert!(matches!(
            store.load().unwrap_err(),
            PreferenceError::Malformed { .. }
        ));
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("nope").join("prefs.json"));

        assert!(matches!(
            store.save(&Preferences::new()).unwrap_err(),
            PreferenceError::Io { .. }
        ));
    }
}
