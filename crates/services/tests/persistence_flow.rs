use std::sync::Arc;

use services::{AnswerService, ScoreService};
use storage::repository::{InMemoryRepository, Storage};
use workbook_core::model::{ANSWERS_STORE_KEY, Rating};

#[tokio::test]
async fn fresh_session_starts_empty() {
    let storage = Storage::in_memory();
    let answers = AnswerService::new(Arc::clone(&storage.answers));
    let scores = ScoreService::new(Arc::clone(&storage.scores));

    assert!(answers.load().await.is_empty());
    assert_eq!(scores.load().await.total(), 0);
}

#[tokio::test]
async fn edits_survive_a_reload() {
    let storage = Storage::in_memory();
    let service = AnswerService::new(Arc::clone(&storage.answers));

    let mut sheet = service.load().await;
    sheet.set_text("q3", "rent and the two subcontractors");
    sheet.toggle_flag("problem_1");
    service.save(&sheet).await.unwrap();

    // A new service over the same repository models an app restart.
    let reopened = AnswerService::new(Arc::clone(&storage.answers));
    let reloaded = reopened.load().await;
    assert_eq!(reloaded.text("q3"), "rent and the two subcontractors");
    assert!(reloaded.flag("problem_1"));
}

#[tokio::test]
async fn score_scenario_rows_zero_and_three() {
    let storage = Storage::in_memory();
    let service = ScoreService::new(Arc::clone(&storage.scores));

    let mut scorecard = service.load().await;
    scorecard.set_rating(0, Rating::FullyInPlace).unwrap();
    scorecard.set_rating(3, Rating::Somewhat).unwrap();
    service.save(&scorecard).await.unwrap();
    assert_eq!(scorecard.total(), 3);

    let reloaded = service.load().await;
    assert_eq!(reloaded.total(), 3);
}

#[tokio::test]
async fn out_of_range_row_does_not_clobber_the_card() {
    let storage = Storage::in_memory();
    let service = ScoreService::new(Arc::clone(&storage.scores));

    let mut scorecard = service.load().await;
    scorecard.set_rating(2, Rating::Somewhat).unwrap();
    service.save(&scorecard).await.unwrap();

    // A rejected rating leaves the card untouched, so re-saving it is safe.
    assert!(scorecard.set_rating(8, Rating::FullyInPlace).is_err());
    service.save(&scorecard).await.unwrap();

    assert_eq!(service.load().await.total(), 1);
}

#[tokio::test]
async fn corrupt_persisted_answers_load_as_empty() {
    let repo = InMemoryRepository::new();
    repo.put_raw(ANSWERS_STORE_KEY, "42").unwrap();

    let service = AnswerService::new(Arc::new(repo));
    assert!(service.load().await.is_empty());
}
