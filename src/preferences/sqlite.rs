use rusqlite::Connection;
use std::path::{Path, PathBuf};

use super::{PreferenceError, PreferenceStore, Preferences};

/// Preferences kept in an embedded `SQLite` database.
///
/// A connection is opened per operation, mirroring the per-event reload of
/// the file backend.
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    pub fn open(db_path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let store = Self {
            db_path: db_path.into(),
        };
        store.init_db()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn init_db(&self) -> Result<(), PreferenceError> {
        let conn = self.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                contact TEXT PRIMARY KEY NOT NULL,
                language TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    fn connect(&self) -> Result<Connection, PreferenceError> {
        Ok(Connection::open(&self.db_path)?)
    }
}

impl PreferenceStore for SqliteStore {
    fn load(&self) -> Result<Preferences, PreferenceError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT contact, language FROM preferences")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

        let mut preferences = Preferences::new();
        for row in rows {
            let (contact, language): (String, String) = row?;
            preferences.insert(contact, language);
        }
        Ok(preferences)
    }

    fn save(&self, preferences: &Preferences) -> Result<(), PreferenceError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM preferences", [])?;
        {
            let mut stmt =
                tx.prepare("INSERT INTO preferences (contact, language) VALUES (?1, ?2)")?;
            for (contact, language) in preferences {
                stmt.execute([contact, language])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store(temp_dir: &TempDir) -> SqliteStore {
        SqliteStore::open(temp_dir.path().join("userPreferences.db")).unwrap()
    }

    #[test]
    fn test_fresh_database_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        let mut prefs = Preferences::new();
        prefs.insert("b@c.us".to_string(), "spanish".to_string());
        prefs.insert("c@c.us".to_string(), "japanese".to_string());
        store.save(&prefs).unwrap();

        assert_eq!(store.load().unwrap(), prefs);
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        let mut first = Preferences::new();
        first.insert("b@c.us".to_string(), "spanish".to_string());
        store.save(&first).unwrap();

        let mut second = Preferences::new();
        second.insert("c@c.us".to_string(), "german".to_string());
        store.save(&second).unwrap();

        assert_eq!(store.load().unwrap(), second);
    }

    #[test]
    fn test_reopen_keeps_data() {
        let temp_dir = TempDir::new().unwrap();
        let mut prefs = Preferences::new();
        prefs.insert("b@c.us".to_string(), "italian".to_string());
        create_test_store(&temp_dir).save(&prefs).unwrap();

        assert_eq!(create_test_store(&temp_dir).load().unwrap(), prefs);
    }
}
