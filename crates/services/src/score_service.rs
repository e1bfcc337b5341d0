use std::sync::Arc;

use storage::repository::ScoreRepository;
use workbook_core::model::Scorecard;

use crate::error::WorkbookServiceError;

/// Load-once / save-on-every-edit access to the fundability scorecard.
#[derive(Clone)]
pub struct ScoreService {
    repo: Arc<dyn ScoreRepository>,
}

impl ScoreService {
    #[must_use]
    pub fn new(repo: Arc<dyn ScoreRepository>) -> Self {
        Self { repo }
    }

    /// Load the persisted scorecard. Missing or unreadable state yields an
    /// unrated card; storage failures are logged, never surfaced.
    pub async fn load(&self) -> Scorecard {
        match self.repo.load_scorecard().await {
            Ok(Some(scorecard)) => scorecard,
            Ok(None) => Scorecard::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load scorecard, starting unrated");
                Scorecard::new()
            }
        }
    }

    /// Persist the full scorecard.
    ///
    /// # Errors
    ///
    /// Returns `WorkbookServiceError` if the snapshot cannot be written.
    pub async fn save(&self, scorecard: &Scorecard) -> Result<(), WorkbookServiceError> {
        self.repo.save_scorecard(scorecard).await?;
        Ok(())
    }
}
