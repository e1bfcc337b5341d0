use std::sync::Arc;

use storage::repository::AnswerRepository;
use workbook_core::model::AnswerSheet;

use crate::error::WorkbookServiceError;

/// Load-once / save-on-every-edit access to the answer sheet.
#[derive(Clone)]
pub struct AnswerService {
    repo: Arc<dyn AnswerRepository>,
}

impl AnswerService {
    #[must_use]
    pub fn new(repo: Arc<dyn AnswerRepository>) -> Self {
        Self { repo }
    }

    /// Load the persisted sheet. Missing or unreadable state yields an
    /// empty sheet; storage failures are logged, never surfaced.
    pub async fn load(&self) -> AnswerSheet {
        match self.repo.load_answers().await {
            Ok(Some(sheet)) => sheet,
            Ok(None) => AnswerSheet::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load answers, starting empty");
                AnswerSheet::new()
            }
        }
    }

    /// Persist the full sheet. Called after every keystroke/toggle.
    ///
    /// # Errors
    ///
    /// Returns `WorkbookServiceError` if the snapshot cannot be written.
    pub async fn save(&self, sheet: &AnswerSheet) -> Result<(), WorkbookServiceError> {
        self.repo.save_answers(sheet).await?;
        Ok(())
    }
}
