#![forbid(unsafe_code)]

pub mod answer_service;
pub mod error;
pub mod score_service;

pub use answer_service::AnswerService;
pub use error::WorkbookServiceError;
pub use score_service::ScoreService;
