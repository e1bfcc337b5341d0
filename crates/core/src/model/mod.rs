mod answers;
pub mod audio;
mod navigation;
mod pages;
mod registry;
mod scorecard;

pub use answers::{ANSWERS_STORE_KEY, AnswerSheet, AnswerValue};
pub use audio::{AUDIO_EXTENSIONS, AudioDirective, AudioEvent, AudioKey, AudioSession, AudioState};
pub use navigation::Cursor;
pub use pages::{
    ChecklistOption, CopyBlock, DisplayMode, FreeTextPrompt, PageBody, PageSpec, PanelPrompt,
    ScoreBandCard,
};
pub use registry::{PAGE_COUNT, page_registry};
pub use scorecard::{
    MAX_TOTAL_SCORE, Rating, SCORE_ROW_COUNT, SCORECARD_STORE_KEY, ScoreBand, Scorecard,
    ScorecardError,
};
