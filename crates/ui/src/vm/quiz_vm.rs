use services::{QuizService, QuizServiceError, QuizView};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Submit,
}

/// Quiz window state: the service plus the text typed so far.
#[derive(Clone)]
pub struct QuizVm {
    service: QuizService,
    answer_draft: String,
}

impl QuizVm {
    #[must_use]
    pub fn new(service: QuizService) -> Self {
        Self {
            service,
            answer_draft: String::new(),
        }
    }

    #[must_use]
    pub fn view(&self) -> QuizView {
        self.service.view()
    }

    #[must_use]
    pub fn answer_draft(&self) -> &str {
        &self.answer_draft
    }

    pub fn set_answer_draft(&mut self, draft: String) {
        self.answer_draft = draft;
    }

    /// Apply an intent. Intents the current view has disabled are ignored,
    /// which covers Enter presses on a disabled field.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the service rejects the command anyway.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<(), ViewError> {
        let view = self.service.view();
        match intent {
            QuizIntent::Start if view.can_start => {
                self.service
                    .start()
                    .map_err(|err| command_failed(intent, &err))?;
            }
            QuizIntent::Submit if view.can_answer => {
                self.service
                    .submit_answer(&self.answer_draft)
                    .map_err(|err| command_failed(intent, &err))?;
            }
            QuizIntent::Start | QuizIntent::Submit => return Ok(()),
        }
        self.answer_draft.clear();
        Ok(())
    }
}

fn command_failed(intent: QuizIntent, err: &QuizServiceError) -> ViewError {
    log::warn!("quiz command {intent:?} failed: {err}");
    ViewError::Unknown
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use quiz_core::{QuizError, QuizPhase};
    use quiz_core::model::{QuestionSet, QuizSettings};
    use quiz_core::time::fixed_clock;
    use services::QuestionBank;

    use super::*;

    fn vm(source: &str) -> QuizVm {
        let bank = QuestionBank::from_set(QuestionSet::parse(source));
        let service = QuizService::new(Arc::new(bank), QuizSettings::default(), fixed_clock())
            .with_shuffle(false);
        QuizVm::new(service)
    }

    #[test]
    fn submit_before_start_is_ignored() {
        let mut vm = vm("Q|A\n");
        vm.set_answer_draft("A".to_owned());
        vm.dispatch(QuizIntent::Submit).unwrap();
        assert_eq!(vm.view().phase, QuizPhase::Idle);
        assert_eq!(vm.answer_draft(), "A");
    }

    #[test]
    fn submit_scores_and_clears_draft() {
        let mut vm = vm("2+2?|4\n3+3?|6\n");
        vm.dispatch(QuizIntent::Start).unwrap();
        vm.set_answer_draft(" 4 ".to_owned());
        vm.dispatch(QuizIntent::Submit).unwrap();

        let view = vm.view();
        assert_eq!(view.score_text, "Score: 1");
        assert_eq!(view.feedback, "Correct!");
        assert_eq!(view.question_text, "3+3?");
        assert_eq!(vm.answer_draft(), "");
    }

    #[test]
    fn start_while_running_is_ignored() {
        let mut vm = vm("2+2?|4\n3+3?|6\n");
        vm.dispatch(QuizIntent::Start).unwrap();
        vm.set_answer_draft("wrong".to_owned());
        vm.dispatch(QuizIntent::Submit).unwrap();
        vm.dispatch(QuizIntent::Start).unwrap();
        assert_eq!(vm.view().question_text, "3+3?");
    }

    #[test]
    fn rejected_command_maps_to_unknown() {
        let err = QuizServiceError::Quiz(QuizError::NotRunning);
        assert_eq!(command_failed(QuizIntent::Submit, &err), ViewError::Unknown);
    }
}
