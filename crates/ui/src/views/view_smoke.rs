use std::path::PathBuf;
use std::sync::Arc;

use quiz_core::NameRecord;
use services::QuestionBank;
use storage::{InMemoryRepository, NameRepository, StorageError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with};

const QUESTIONS: &str = "2+2?|4\nCapital of France?|Paris\nbroken line\n";

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_loaded_count() {
    let mut harness = setup_view_harness(ViewKind::Home, QUESTIONS, &[]);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Questions loaded: 2"), "missing count in {html}");
    assert!(html.contains("Questions per game: 10"), "missing cap in {html}");
    assert!(!html.contains("Failed to load questions"), "unexpected error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_reports_failed_load() {
    let mut harness = setup_view_harness_with(
        ViewKind::Home,
        QuestionBank::failed(),
        Arc::new(InMemoryRepository::new()),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Questions loaded: 0"), "missing count in {html}");
    assert!(html.contains("Failed to load questions"), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_renders_idle_quiz() {
    let mut harness = setup_view_harness(ViewKind::Play, QUESTIONS, &[]);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Press 'Start Quiz' to begin."), "missing prompt in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Start Quiz"), "missing start button in {html}");
    assert!(html.contains("Submit"), "missing submit button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn hello_view_smoke_renders_greeting() {
    let mut harness = setup_view_harness(ViewKind::Hello, "", &[]);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Hello World!"), "missing greeting in {html}");
    assert!(html.contains("Click me!"), "missing button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn style_and_layout_views_smoke_render_buttons() {
    let mut style = setup_view_harness(ViewKind::Style, "", &[]);
    style.rebuild();
    let html = style.render();
    assert!(html.contains("styled-button"), "missing styled button in {html}");

    let mut layout = setup_view_harness(ViewKind::Layout, "", &[]);
    layout.rebuild();
    let html = layout.render();
    assert!(
        html.contains("This is a good layout example:"),
        "missing label in {html}"
    );
    assert!(html.contains("Click Me"), "missing button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn countries_view_smoke_renders_both_parts() {
    let mut harness = setup_view_harness(
        ViewKind::Countries,
        "",
        &["Algeria", "Chad", "Togo", " ", "Australia", "Japan"],
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Part A: Countries starting with A or T"), "missing part A in {html}");
    assert!(html.contains("TOGO"), "missing TOGO in {html}");
    assert!(html.contains("AUSTRALIA"), "missing AUSTRALIA in {html}");
    assert!(html.contains("Part B: Countries with exactly 2 vowels"), "missing part B in {html}");
    assert!(html.contains("napaJ"), "missing reversed name in {html}");
}

struct FailingNames;

#[async_trait::async_trait]
impl NameRepository for FailingNames {
    async fn load_names(&self) -> Result<Vec<NameRecord>, StorageError> {
        Err(StorageError::NotFound {
            path: PathBuf::from("missing.txt"),
        })
    }
}

#[tokio::test(flavor = "current_thread")]
async fn countries_view_smoke_renders_error_without_parts() {
    let mut harness =
        setup_view_harness_with(ViewKind::Countries, QuestionBank::default(), Arc::new(FailingNames));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Could not read the input file."), "missing error in {html}");
    assert!(!html.contains("Part A"), "unexpected partial output in {html}");
}
