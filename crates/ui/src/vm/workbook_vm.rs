//! Small display mappings from domain state to label strings.

use workbook_core::model::{Cursor, DisplayMode, MAX_TOTAL_SCORE, Scorecard};

/// Header position indicator, e.g. "Page 3 of 12".
#[must_use]
pub fn page_position_label(cursor: &Cursor) -> String {
    format!("Page {} of {}", cursor.index() + 1, cursor.len())
}

/// Width of the footer progress bar, in percent.
#[must_use]
pub fn progress_percent(cursor: &Cursor) -> f64 {
    cursor.progress() * 100.0
}

/// Running total under the score table.
#[must_use]
pub fn total_score_label(scorecard: &Scorecard) -> String {
    format!("Total Score: {} / {MAX_TOTAL_SCORE}", scorecard.total())
}

/// Section label in the print flow; the cover goes unlabeled.
#[must_use]
pub fn print_page_label(ordinal: usize, title: &str) -> Option<String> {
    (ordinal > 0).then(|| format!("Page {} \u{2014} {title}", ordinal + 1))
}

/// Decision taken when the automatic print delay elapses: the dialog opens
/// only if the view is still in print mode and the request is still pending.
/// Exiting the preview (or the dialog having already fired) cancels it.
#[must_use]
pub fn auto_print_should_fire(mode: DisplayMode, pending: bool) -> bool {
    mode == DisplayMode::Print && pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use workbook_core::model::Rating;

    #[test]
    fn position_label_is_one_based() {
        let mut cursor = Cursor::new(12);
        assert_eq!(page_position_label(&cursor), "Page 1 of 12");
        cursor.next();
        assert_eq!(page_position_label(&cursor), "Page 2 of 12");
    }

    #[test]
    fn progress_spans_the_workbook() {
        let mut cursor = Cursor::new(2);
        assert!((progress_percent(&cursor) - 50.0).abs() < f64::EPSILON);
        cursor.next();
        assert!((progress_percent(&cursor) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn total_label_includes_the_maximum() {
        let mut scorecard = Scorecard::new();
        assert_eq!(total_score_label(&scorecard), "Total Score: 0 / 16");
        scorecard.set_rating(0, Rating::FullyInPlace).unwrap();
        scorecard.set_rating(3, Rating::Somewhat).unwrap();
        assert_eq!(total_score_label(&scorecard), "Total Score: 3 / 16");
    }

    #[test]
    fn delayed_print_fires_once_then_the_cleared_flag_blocks_it() {
        assert!(auto_print_should_fire(DisplayMode::Print, true));
        // The flag clears as the dialog opens; a re-run of the delay path
        // must not open a second one.
        assert!(!auto_print_should_fire(DisplayMode::Print, false));
    }

    #[test]
    fn exiting_the_preview_before_the_delay_cancels_the_dialog() {
        assert!(!auto_print_should_fire(DisplayMode::Interactive, true));
        assert!(!auto_print_should_fire(DisplayMode::Interactive, false));
    }

    #[test]
    fn cover_page_label_is_suppressed() {
        assert_eq!(print_page_label(0, "Cover"), None);
        assert_eq!(
            print_page_label(1, "How to Use This Workbook").as_deref(),
            Some("Page 2 \u{2014} How to Use This Workbook")
        );
    }
}
