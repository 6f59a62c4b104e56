use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{QuestionSet, QuizSettings};
use quiz_core::time::fixed_clock;
use quiz_core::{Clock, CountryFilter, NameRecord};
use services::{CountryService, QuestionBank};
use storage::{InMemoryRepository, NameRepository};

use crate::context::{UiApp, build_app_context};
use crate::views::{CountriesView, HelloView, HomeView, LayoutView, PlayView, StyleView};

#[derive(Clone)]
struct TestApp {
    bank: Arc<QuestionBank>,
    country_service: Arc<CountryService>,
}

impl UiApp for TestApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn quiz_settings(&self) -> QuizSettings {
        QuizSettings::default()
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn country_service(&self) -> Arc<CountryService> {
        Arc::clone(&self.country_service)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Play,
    Hello,
    Style,
    Layout,
    Countries,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Play => rsx! { PlayView {} },
        ViewKind::Hello => rsx! { HelloView {} },
        ViewKind::Style => rsx! { StyleView {} },
        ViewKind::Layout => rsx! { LayoutView {} },
        ViewKind::Countries => rsx! { CountriesView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

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

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Harness over in-memory sources: the quiz lines in `questions` and one
/// country per entry of `names`.
pub fn setup_view_harness(view: ViewKind, questions: &str, names: &[&str]) -> ViewHarness {
    let repo = InMemoryRepository::new();
    repo.set_names(names.iter().copied().map(NameRecord::from).collect())
        .expect("seed names");
    let bank = QuestionBank::from_set(QuestionSet::parse(questions));
    setup_view_harness_with(view, bank, Arc::new(repo))
}

pub fn setup_view_harness_with(
    view: ViewKind,
    bank: QuestionBank,
    names: Arc<dyn NameRepository>,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        bank: Arc::new(bank),
        country_service: Arc::new(CountryService::new(names, CountryFilter::default())),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
