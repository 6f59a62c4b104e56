use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::QuizSettings;
use services::{CountryService, QuestionBank, QuizService};

pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> Arc<QuestionBank>;
    fn quiz_settings(&self) -> QuizSettings;
    fn clock(&self) -> Clock;

    fn country_service(&self) -> Arc<CountryService>;
}

#[derive(Clone)]
pub struct AppContext {
    question_bank: Arc<QuestionBank>,
    quiz_settings: QuizSettings,
    clock: Clock,

    country_service: Arc<CountryService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_bank: app.question_bank(),
            quiz_settings: app.quiz_settings(),
            clock: app.clock(),
            country_service: app.country_service(),
        }
    }

    #[must_use]
    pub fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.question_bank)
    }

    #[must_use]
    pub fn quiz_settings(&self) -> QuizSettings {
        self.quiz_settings
    }

    /// A fresh quiz over the shared bank, one per quiz window.
    #[must_use]
    pub fn new_quiz(&self) -> QuizService {
        QuizService::new(self.question_bank(), self.quiz_settings, self.clock)
    }

    #[must_use]
    pub fn country_service(&self) -> Arc<CountryService> {
        Arc::clone(&self.country_service)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
