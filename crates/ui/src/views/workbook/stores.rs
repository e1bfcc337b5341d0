use std::sync::Arc;

use dioxus::prelude::*;

use services::{AnswerService, ScoreService};
use workbook_core::model::{AnswerSheet, Rating, Scorecard};

use crate::context::AppContext;

/// In-memory answer and score state plus the services that persist it.
///
/// Every mutation updates the signal, then writes the full snapshot in the
/// background. Write failures are logged, never surfaced (the next edit
/// retries the whole snapshot anyway).
#[derive(Clone)]
pub(super) struct WorkbookStores {
    pub answers: Signal<AnswerSheet>,
    pub scorecard: Signal<Scorecard>,
    answer_service: Arc<AnswerService>,
    score_service: Arc<ScoreService>,
}

/// Build the stores, kick off the one-time load from durable storage, and
/// provide them to the page components.
pub(super) fn use_workbook_stores(ctx: &AppContext) -> WorkbookStores {
    let answers = use_signal(AnswerSheet::new);
    let scorecard = use_signal(Scorecard::new);

    let stores = WorkbookStores {
        answers,
        scorecard,
        answer_service: ctx.answers(),
        score_service: ctx.scores(),
    };

    {
        let stores = stores.clone();
        use_future(move || {
            let stores = stores.clone();
            async move {
                let mut answers = stores.answers;
                answers.set(stores.answer_service.load().await);
                let mut scorecard = stores.scorecard;
                scorecard.set(stores.score_service.load().await);
            }
        });
    }

    use_context_provider(|| stores.clone());
    stores
}

impl WorkbookStores {
    pub fn set_text(&self, key: &str, value: String) {
        let mut answers = self.answers;
        answers.write().set_text(key, value);
        self.persist_answers();
    }

    pub fn toggle_flag(&self, key: &str) {
        let mut answers = self.answers;
        answers.write().toggle_flag(key);
        self.persist_answers();
    }

    pub fn set_rating(&self, row: usize, rating: Rating) {
        let mut scorecard = self.scorecard;
        if let Err(err) = scorecard.write().set_rating(row, rating) {
            tracing::warn!(error = %err, "ignoring rating outside the score table");
            return;
        }
        self.persist_scorecard();
    }

    fn persist_answers(&self) {
        let service = Arc::clone(&self.answer_service);
        let snapshot = self.answers.peek().clone();
        spawn(async move {
            if let Err(err) = service.save(&snapshot).await {
                tracing::warn!(error = %err, "failed to persist answers");
            }
        });
    }

    fn persist_scorecard(&self) {
        let service = Arc::clone(&self.score_service);
        let snapshot = *self.scorecard.peek();
        spawn(async move {
            if let Err(err) = service.save(&snapshot).await {
                tracing::warn!(error = %err, "failed to persist scorecard");
            }
        });
    }
}
