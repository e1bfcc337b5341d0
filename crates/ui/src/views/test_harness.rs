use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use services::{AnswerService, ScoreService};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::WorkbookView;

#[derive(Clone)]
struct TestApp {
    print_on_launch: bool,
    answers: Arc<AnswerService>,
    scores: Arc<ScoreService>,
}

impl UiApp for TestApp {
    fn print_on_launch(&self) -> bool {
        self.print_on_launch
    }

    fn answers(&self) -> Arc<AnswerService> {
        Arc::clone(&self.answers)
    }

    fn scores(&self) -> Arc<ScoreService> {
        Arc::clone(&self.scores)
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    print: String,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn Harness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! {
        WorkbookView { print: props.print.clone() }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub answers: Arc<AnswerService>,
    pub scores: Arc<ScoreService>,
}

impl ViewHarness {
    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

/// Harness over in-memory storage. Seed through the returned services
/// before the first `drive_async` to model previously saved sessions.
pub fn setup_view_harness(print: &str, print_on_launch: bool) -> ViewHarness {
    let storage = Storage::in_memory();
    let answers = Arc::new(AnswerService::new(Arc::clone(&storage.answers)));
    let scores = Arc::new(ScoreService::new(Arc::clone(&storage.scores)));

    let app = Arc::new(TestApp {
        print_on_launch,
        answers: Arc::clone(&answers),
        scores: Arc::clone(&scores),
    });

    let mut dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            app,
            print: print.to_string(),
        },
    );
    dom.rebuild_in_place();

    ViewHarness {
        dom,
        answers,
        scores,
    }
}
