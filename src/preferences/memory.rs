use std::sync::{Mutex, PoisonError};

use super::{PreferenceError, PreferenceStore, Preferences};

/// In-process preference store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Preferences>,
}

impl MemoryStore {
    pub fn new(initial: Preferences) -> Self {
        Self {
            inner: Mutex::new(initial),
        }
    }

    /// Returns a copy of the current contents.
    pub fn snapshot(&self) -> Preferences {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Preferences, PreferenceError> {
        Ok(self.snapshot())
    }

    fn save(&self, preferences: &Preferences) -> Result<(), PreferenceError> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = preferences.clone();
        Ok(())
    }
}
