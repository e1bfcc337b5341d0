use thiserror::Error;

use crate::model::ScorecardError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Scorecard(#[from] ScorecardError),
}
