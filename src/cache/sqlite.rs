use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

use crate::paths;
use crate::translation::SYSTEM_PROMPT_TEMPLATE;

/// Identity of one translation: same text, language, provider and prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKey {
    digest: String,
    target_language: String,
}

impl CacheKey {
    pub fn new(source_text: &str, target_language: &str, namespace: &str) -> Self {
        let cache_input = serde_json::json!({
            "source_text": source_text,
            "target_language": target_language,
            "namespace": namespace,
            "prompt_hash": Self::prompt_hash(),
        });

        let mut hasher = Sha256::new();
        hasher.update(cache_input.to_string().as_bytes());

        Self {
            digest: hex::encode(hasher.finalize()),
            target_language: target_language.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.digest
    }

    /// Compute hash of the system prompt template
    pub fn prompt_hash() -> String {
        let mut hasher = Sha256::new();
        hasher.update(SYSTEM_PROMPT_TEMPLATE.as_bytes());
        hex::encode(hasher.finalize())
    }
}

pub struct CacheManager {
    db_path: PathBuf,
}

impl CacheManager {
    /// Opens the cache in the user cache directory.
    pub fn new() -> Result<Self> {
        let cache_dir = paths::cache_dir()?;

        std::fs::create_dir_all(&cache_dir).with_context(|| {
            format!("Failed to create cache directory: {}", cache_dir.display())
        })?;

        Self::open(cache_dir.join("translations.db"))
    }

    pub fn open(db_path: PathBuf) -> Result<Self> {
        let manager = Self { db_path };
        manager.init_db()?;
        Ok(manager)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS translations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                cache_key TEXT UNIQUE NOT NULL,
                translated_text TEXT NOT NULL,
                target_language TEXT NOT NULL,
                prompt_hash TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                accessed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create translations table")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .with_context(|| format!("Failed to open cache database: {}", self.db_path.display()))
    }

    pub fn get(&self, key: &CacheKey) -> Result<Option<String>> {
        let conn = self.connect()?;

        let result: Option<String> = conn
            .query_row(
                "SELECT translated_text FROM translations WHERE cache_key = ?1",
                [key.as_str()],
                |row| row.get(0),
            )
            .optional()
            .context("Failed to read translation cache")?;

        if result.is_some() {
            conn.execute(
                "UPDATE translations SET accessed_at = CURRENT_TIMESTAMP WHERE cache_key = ?1",
                [key.as_str()],
            )?;
        }

        Ok(result)
    }

    pub fn put(&self, key: &CacheKey, translated_text: &str) -> Result<()> {
        let prompt_hash = CacheKey::prompt_hash();
        let conn = self.connect()?;

        conn.execute(
            "INSERT OR REPLACE INTO translations
             (cache_key, translated_text, target_language, prompt_hash)
             VALUES (?1, ?2, ?3, ?4)",
            [
                key.as_str(),
                translated_text,
                key.target_language.as_str(),
                prompt_hash.as_str(),
            ],
        )
        .context("Failed to insert translation into cache")?;

        Ok(())
    }
}
