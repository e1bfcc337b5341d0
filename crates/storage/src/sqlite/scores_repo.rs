use async_trait::async_trait;

use workbook_core::model::{SCORECARD_STORE_KEY, Scorecard};

use super::SqliteRepository;
use crate::repository::{ScoreRepository, StorageError};

#[async_trait]
impl ScoreRepository for SqliteRepository {
    async fn load_scorecard(&self) -> Result<Option<Scorecard>, StorageError> {
        let raw = self.fetch_entry(SCORECARD_STORE_KEY).await?;
        Ok(raw.map(|raw| Scorecard::from_json_lossy(&raw)))
    }

    async fn save_scorecard(&self, scorecard: &Scorecard) -> Result<(), StorageError> {
        self.put_entry(SCORECARD_STORE_KEY, &scorecard.to_json().to_string())
            .await
    }
}
