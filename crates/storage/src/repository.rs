use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

use workbook_core::model::{ANSWERS_STORE_KEY, AnswerSheet, SCORECARD_STORE_KEY, Scorecard};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persistence contract for the answer sheet.
///
/// The whole map is written on every mutation and read once at startup.
/// Malformed persisted data decodes lossily in the domain layer, so loads
/// only fail on transport problems.
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Fetch the persisted sheet, or `None` when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be read.
    async fn load_answers(&self) -> Result<Option<AnswerSheet>, StorageError>;

    /// Persist the full sheet, replacing any previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    async fn save_answers(&self, sheet: &AnswerSheet) -> Result<(), StorageError>;
}

/// Persistence contract for the scorecard. Same snapshot semantics as
/// [`AnswerRepository`].
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Fetch the persisted scorecard, or `None` when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be read.
    async fn load_scorecard(&self) -> Result<Option<Scorecard>, StorageError>;

    /// Persist the full scorecard, replacing any previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    async fn save_scorecard(&self, scorecard: &Scorecard) -> Result<(), StorageError>;
}

/// Bundle of repositories handed to the service layer.
pub struct Storage {
    pub answers: Arc<dyn AnswerRepository>,
    pub scores: Arc<dyn ScoreRepository>,
}

impl Storage {
    /// In-process storage for tests and harnesses.
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        Self {
            answers: Arc::new(repo.clone()),
            scores: Arc::new(repo),
        }
    }
}

/// Key-value store over a shared map. Holds the same serialized strings the
/// SQLite adapter writes, so tests exercise the real round-trip path.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw serialized value, bypassing the typed API. Lets tests
    /// stage malformed persisted data.
    pub fn put_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Connection("poisoned store lock".into()))
    }
}

#[async_trait]
impl AnswerRepository for InMemoryRepository {
    async fn load_answers(&self) -> Result<Option<AnswerSheet>, StorageError> {
        let entries = self.lock()?;
        Ok(entries
            .get(ANSWERS_STORE_KEY)
            .map(|raw| AnswerSheet::from_json_lossy(raw)))
    }

    async fn save_answers(&self, sheet: &AnswerSheet) -> Result<(), StorageError> {
        self.lock()?
            .insert(ANSWERS_STORE_KEY.to_string(), sheet.to_json().to_string());
        Ok(())
    }
}

#[async_trait]
impl ScoreRepository for InMemoryRepository {
    async fn load_scorecard(&self) -> Result<Option<Scorecard>, StorageError> {
        let entries = self.lock()?;
        Ok(entries
            .get(SCORECARD_STORE_KEY)
            .map(|raw| Scorecard::from_json_lossy(raw)))
    }

    async fn save_scorecard(&self, scorecard: &Scorecard) -> Result<(), StorageError> {
        self.lock()?.insert(
            SCORECARD_STORE_KEY.to_string(),
            scorecard.to_json().to_string(),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workbook_core::model::Rating;

    #[tokio::test]
    async fn unsaved_stores_load_as_none() {
        let repo = InMemoryRepository::new();
        assert!(repo.load_answers().await.unwrap().is_none());
        assert!(repo.load_scorecard().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn answers_round_trip() {
        let repo = InMemoryRepository::new();
        let mut sheet = AnswerSheet::new();
        sheet.set_text("q1", "invoices");
        sheet.set_flag("problem_3", true);

        repo.save_answers(&sheet).await.unwrap();
        assert_eq!(repo.load_answers().await.unwrap(), Some(sheet));
    }

    #[tokio::test]
    async fn scorecard_round_trip() {
        let repo = InMemoryRepository::new();
        let mut scorecard = Scorecard::new();
        scorecard.set_rating(0, Rating::FullyInPlace).unwrap();

        repo.save_scorecard(&scorecard).await.unwrap();
        assert_eq!(repo.load_scorecard().await.unwrap(), Some(scorecard));
    }

    #[tokio::test]
    async fn malformed_raw_data_decodes_to_empty() {
        let repo = InMemoryRepository::new();
        repo.put_raw(ANSWERS_STORE_KEY, "{broken").unwrap();
        repo.put_raw(SCORECARD_STORE_KEY, "[]").unwrap();

        let sheet = repo.load_answers().await.unwrap().unwrap();
        assert!(sheet.is_empty());
        let scorecard = repo.load_scorecard().await.unwrap().unwrap();
        assert_eq!(scorecard.total(), 0);
    }
}
