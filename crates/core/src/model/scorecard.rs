use serde_json::Value;
use thiserror::Error;

/// Number of statements on the fundability checklist.
pub const SCORE_ROW_COUNT: usize = 8;

/// Highest attainable total: every row rated [`Rating::FullyInPlace`].
pub const MAX_TOTAL_SCORE: u8 = 16;

/// Storage key the serialized scorecard is persisted under.
pub const SCORECARD_STORE_KEY: &str = "workbook_scorecard";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScorecardError {
    #[error("score row {0} out of range (rows 0..{SCORE_ROW_COUNT})")]
    RowOutOfRange(usize),
}

/// How fully one checklist statement is in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    NotInPlace,
    Somewhat,
    FullyInPlace,
}

impl Rating {
    pub const ALL: [Rating; 3] = [Rating::NotInPlace, Rating::Somewhat, Rating::FullyInPlace];

    #[must_use]
    pub fn points(self) -> u8 {
        match self {
            Rating::NotInPlace => 0,
            Rating::Somewhat => 1,
            Rating::FullyInPlace => 2,
        }
    }

    /// Inverse of [`Rating::points`]; anything outside 0..=2 is rejected.
    #[must_use]
    pub fn from_points(points: u8) -> Option<Self> {
        match points {
            0 => Some(Rating::NotInPlace),
            1 => Some(Rating::Somewhat),
            2 => Some(Rating::FullyInPlace),
            _ => None,
        }
    }
}

/// Which reading of the total applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 0–5: lenders cannot see a structure to fund.
    InvisibleToCapital,
    /// 6–11: money comes in but lacks direction.
    LeakingPotential,
    /// 12–16: good flow, vulnerable to shocks.
    FundableButUnprotected,
}

impl ScoreBand {
    #[must_use]
    pub fn for_total(total: u8) -> Self {
        match total {
            0..=5 => ScoreBand::InvisibleToCapital,
            6..=11 => ScoreBand::LeakingPotential,
            _ => ScoreBand::FundableButUnprotected,
        }
    }
}

/// Per-row ratings for the fixed 8-statement checklist.
///
/// Rows start unrated and contribute 0 to the total until rated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scorecard {
    rows: [Option<Rating>; SCORE_ROW_COUNT],
}

impl Scorecard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rating(&self, row: usize) -> Option<Rating> {
        self.rows.get(row).copied().flatten()
    }

    /// Rate `row`, replacing any previous rating.
    ///
    /// # Errors
    ///
    /// Returns `ScorecardError::RowOutOfRange` for rows past the fixed table.
    pub fn set_rating(&mut self, row: usize, rating: Rating) -> Result<(), ScorecardError> {
        let slot = self
            .rows
            .get_mut(row)
            .ok_or(ScorecardError::RowOutOfRange(row))?;
        *slot = Some(rating);
        Ok(())
    }

    /// Sum of the rated rows; unrated rows count 0.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.rows
            .iter()
            .flatten()
            .map(|rating| rating.points())
            .sum()
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_total(self.total())
    }

    /// Serialized shape written to storage: row index → points.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (row, rating) in self.rows.iter().enumerate() {
            if let Some(rating) = rating {
                map.insert(row.to_string(), Value::from(rating.points()));
            }
        }
        Value::Object(map)
    }

    /// Rebuild a scorecard from persisted JSON, dropping anything malformed:
    /// non-numeric keys, rows past the table, and points outside 0..=2.
    #[must_use]
    pub fn from_json_lossy(raw: &str) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) else {
            return Self::default();
        };

        let mut scorecard = Self::default();
        for (key, value) in map {
            let Ok(row) = key.parse::<usize>() else {
                continue;
            };
            let Some(rating) = value
                .as_u64()
                .and_then(|points| u8::try_from(points).ok())
                .and_then(Rating::from_points)
            else {
                continue;
            };
            // Out-of-range rows are treated as absent, same as bad values.
            let _ = scorecard.set_rating(row, rating);
        }
        scorecard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scorecard_totals_zero() {
        let scorecard = Scorecard::new();
        assert_eq!(scorecard.total(), 0);
        assert_eq!(scorecard.band(), ScoreBand::InvisibleToCapital);
    }

    #[test]
    fn total_sums_present_rows() {
        let mut scorecard = Scorecard::new();
        scorecard.set_rating(0, Rating::FullyInPlace).unwrap();
        scorecard.set_rating(3, Rating::Somewhat).unwrap();
        assert_eq!(scorecard.total(), 3);
    }

    #[test]
    fn full_card_hits_the_maximum() {
        let mut scorecard = Scorecard::new();
        for row in 0..SCORE_ROW_COUNT {
            scorecard.set_rating(row, Rating::FullyInPlace).unwrap();
        }
        assert_eq!(scorecard.total(), MAX_TOTAL_SCORE);
        assert_eq!(scorecard.band(), ScoreBand::FundableButUnprotected);
    }

    #[test]
    fn rating_replaces_previous_value() {
        let mut scorecard = Scorecard::new();
        scorecard.set_rating(2, Rating::FullyInPlace).unwrap();
        scorecard.set_rating(2, Rating::NotInPlace).unwrap();
        assert_eq!(scorecard.rating(2), Some(Rating::NotInPlace));
        assert_eq!(scorecard.total(), 0);
    }

    #[test]
    fn out_of_range_row_is_rejected() {
        let mut scorecard = Scorecard::new();
        assert_eq!(
            scorecard.set_rating(SCORE_ROW_COUNT, Rating::Somewhat),
            Err(ScorecardError::RowOutOfRange(SCORE_ROW_COUNT))
        );
    }

    #[test]
    fn bands_cover_the_documented_ranges() {
        assert_eq!(ScoreBand::for_total(0), ScoreBand::InvisibleToCapital);
        assert_eq!(ScoreBand::for_total(5), ScoreBand::InvisibleToCapital);
        assert_eq!(ScoreBand::for_total(6), ScoreBand::LeakingPotential);
        assert_eq!(ScoreBand::for_total(11), ScoreBand::LeakingPotential);
        assert_eq!(ScoreBand::for_total(12), ScoreBand::FundableButUnprotected);
        assert_eq!(ScoreBand::for_total(16), ScoreBand::FundableButUnprotected);
    }

    #[test]
    fn json_round_trip() {
        let mut scorecard = Scorecard::new();
        scorecard.set_rating(0, Rating::FullyInPlace).unwrap();
        scorecard.set_rating(7, Rating::Somewhat).unwrap();

        let raw = scorecard.to_json().to_string();
        assert_eq!(Scorecard::from_json_lossy(&raw), scorecard);
    }

    #[test]
    fn lossy_decode_drops_malformed_rows() {
        let raw = r#"{"0":2,"1":7,"not-a-row":1,"99":2,"3":"two"}"#;
        let scorecard = Scorecard::from_json_lossy(raw);
        assert_eq!(scorecard.rating(0), Some(Rating::FullyInPlace));
        assert_eq!(scorecard.rating(1), None);
        assert_eq!(scorecard.rating(3), None);
        assert_eq!(scorecard.total(), 2);
    }
}
