//! Best-score persistence capability.
//!
//! The store is injected into the skill; there is no process-wide client.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Best score store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Best score data is corrupt: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Best score store lock poisoned")]
    Poisoned,

    #[error("Best score store unavailable: {0}")]
    Unavailable(String),
}

/// Per-user best score, keyed by the platform's user id.
pub trait BestScoreStore {
    /// # Errors
    ///
    /// Returns a `StoreError` when the backing storage cannot be read.
    fn get_best_score(&self, user_id: &str) -> Result<Option<u64>, StoreError>;

    /// # Errors
    ///
    /// Returns a `StoreError` when the backing storage cannot be written.
    fn put_best_score(&self, user_id: &str, score: u64) -> Result<(), StoreError>;
}

impl<T: BestScoreStore + ?Sized> BestScoreStore for &T {
    fn get_best_score(&self, user_id: &str) -> Result<Option<u64>, StoreError> {
        (**self).get_best_score(user_id)
    }

    fn put_best_score(&self, user_id: &str, score: u64) -> Result<(), StoreError> {
        (**self).put_best_score(user_id, score)
    }
}

impl<T: BestScoreStore + ?Sized> BestScoreStore for Box<T> {
    fn get_best_score(&self, user_id: &str) -> Result<Option<u64>, StoreError> {
        (**self).get_best_score(user_id)
    }

    fn put_best_score(&self, user_id: &str, score: u64) -> Result<(), StoreError> {
        (**self).put_best_score(user_id, score)
    }
}

/// Store `score` if it beats the user's current best.
///
/// Returns whether a new best was written. This is a plain get-then-put.
///
/// # Errors
///
/// Propagates any `StoreError` from the read or the write.
pub fn record_best_score<S: BestScoreStore + ?Sized>(
    store: &S,
    user_id: &str,
    score: u64,
) -> Result<bool, StoreError> {
    let current = store.get_best_score(user_id)?;
    if score <= current.unwrap_or(0) {
        return Ok(false);
    }
    store.put_best_score(user_id, score)?;
    Ok(true)
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    scores: RwLock<HashMap<String, u64>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BestScoreStore for InMemoryStore {
    fn get_best_score(&self, user_id: &str) -> Result<Option<u64>, StoreError> {
        let scores = self.scores.read().map_err(|_| StoreError::Poisoned)?;
        Ok(scores.get(user_id).copied())
    }

    fn put_best_score(&self, user_id: &str, score: u64) -> Result<(), StoreError> {
        let mut scores = self.scores.write().map_err(|_| StoreError::Poisoned)?;
        scores.insert(user_id.to_string(), score);
        Ok(())
    }
}

/// Best scores kept in a single JSON object on disk, `{ user_id: score }`.
///
/// The whole file is read on every call and replaced on every put.
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

    fn load(&self) -> Result<HashMap<String, u64>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(HashMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }
}

impl BestScoreStore for JsonFileStore {
    fn get_best_score(&self, user_id: &str) -> Result<Option<u64>, StoreError> {
        Ok(self.load()?.get(user_id).copied())
    }

    fn put_best_score(&self, user_id: &str, score: u64) -> Result<(), StoreError> {
        let mut scores = self.load()?;
        scores.insert(user_id.to_string(), score);
        let raw = serde_json::to_string_pretty(&scores)?;

        // Stage beside the target, then rename over it. Readers only ever
        // see a complete file.
        let staging = self.staging_path();
        fs::write(&staging, raw)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}
