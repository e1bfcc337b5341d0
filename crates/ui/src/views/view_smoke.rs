use workbook_core::model::{AnswerSheet, Rating, Scorecard};

use super::test_harness::setup_view_harness;

#[tokio::test]
async fn interactive_launch_shows_the_cover() {
    let mut harness = setup_view_harness("", false);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Get Fundable Fast"));
    assert!(html.contains("The Cash Flow Reality Workbook"));
    assert!(html.contains("Page 1 of 12"));
    // Only the current page renders in interactive mode.
    assert!(!html.contains("Fundability Reality Check"));
}

#[tokio::test]
async fn cover_page_offers_narration() {
    let mut harness = setup_view_harness("", false);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Listen"));
}

#[tokio::test]
async fn saved_answers_appear_after_startup_load() {
    let mut harness = setup_view_harness("1", false);

    let mut sheet = AnswerSheet::new();
    sheet.set_text("q1", "two anchor clients pay monthly");
    harness.answers.save(&sheet).await.unwrap();

    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("two anchor clients pay monthly"));
}

#[tokio::test]
async fn print_query_parameter_renders_the_full_flow() {
    let mut harness = setup_view_harness("1", false);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Print Preview Mode"));
    assert_eq!(html.matches("print-section").count(), 12);
    // Every page after the cover is labeled; the cover is not.
    assert!(html.contains("Page 2 \u{2014} How to Use This Workbook"));
    assert!(html.contains("Page 12 \u{2014} The Next Step"));
    assert!(!html.contains("Page 1 \u{2014}"));
}

#[tokio::test]
async fn print_on_launch_flag_enters_print_mode_without_the_query() {
    let mut harness = setup_view_harness("", true);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Print Preview Mode"));
}

#[tokio::test]
async fn print_flow_shows_the_score_total_with_static_cells() {
    let mut harness = setup_view_harness("1", false);

    let mut scorecard = Scorecard::new();
    scorecard.set_rating(0, Rating::FullyInPlace).unwrap();
    scorecard.set_rating(3, Rating::Somewhat).unwrap();
    harness.scores.save(&scorecard).await.unwrap();

    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Total Score: 3 / 16"));
    // Paper gets empty circles, not buttons.
    assert!(html.contains("score-dot-print"));
    assert!(!html.contains("score-dot-on"));
}

#[tokio::test]
async fn interactive_mode_is_the_default_without_the_parameter() {
    let mut harness = setup_view_harness("0", false);
    harness.drive_async().await;

    let html = harness.render();
    assert!(!html.contains("Print Preview Mode"));
    assert!(html.contains("Page 1 of 12"));
}
