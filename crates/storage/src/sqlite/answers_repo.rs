use async_trait::async_trait;

use workbook_core::model::{ANSWERS_STORE_KEY, AnswerSheet};

use super::SqliteRepository;
use crate::repository::{AnswerRepository, StorageError};

#[async_trait]
impl AnswerRepository for SqliteRepository {
    async fn load_answers(&self) -> Result<Option<AnswerSheet>, StorageError> {
        let raw = self.fetch_entry(ANSWERS_STORE_KEY).await?;
        Ok(raw.map(|raw| AnswerSheet::from_json_lossy(&raw)))
    }

    async fn save_answers(&self, sheet: &AnswerSheet) -> Result<(), StorageError> {
        self.put_entry(ANSWERS_STORE_KEY, &sheet.to_json().to_string())
            .await
    }
}
