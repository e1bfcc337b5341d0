use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use services::{AnswerService, ScoreService};

/// What the composition root (e.g. `crates/app`) provides to the UI.
pub trait UiApp: Send + Sync {
    /// Launch straight into print mode (the `--print` flag).
    fn print_on_launch(&self) -> bool;

    fn answers(&self) -> Arc<AnswerService>;
    fn scores(&self) -> Arc<ScoreService>;
}

#[derive(Clone)]
pub struct AppContext {
    print_on_launch_configured: bool,
    print_on_launch_once: Arc<AtomicBool>,

    answers: Arc<AnswerService>,
    scores: Arc<ScoreService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let print_on_launch_configured = app.print_on_launch();
        Self {
            print_on_launch_configured,
            print_on_launch_once: Arc::new(AtomicBool::new(print_on_launch_configured)),
            answers: app.answers(),
            scores: app.scores(),
        }
    }

    /// One-shot read of the launch flag, so re-renders never re-enter print
    /// mode after the user exits it.
    #[must_use]
    pub fn take_print_on_launch(&self) -> bool {
        self.print_on_launch_once.swap(false, Ordering::AcqRel)
    }

    /// The configured value (not the one-shot value). Useful for diagnostics.
    #[must_use]
    pub fn print_on_launch_configured(&self) -> bool {
        self.print_on_launch_configured
    }

    #[must_use]
    pub fn answers(&self) -> Arc<AnswerService> {
        Arc::clone(&self.answers)
    }

    #[must_use]
    pub fn scores(&self) -> Arc<ScoreService> {
        Arc::clone(&self.scores)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
