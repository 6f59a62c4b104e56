use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::model::QuizSettings;
use quiz_core::{AnswerOutcome, Clock, QuizPhase, QuizSession};

use super::bank::QuestionBank;
use super::plan::RoundBuilder;
use super::view::{FINISHED_PROMPT, QuizView};
use crate::error::QuizServiceError;

/// Command handlers for one quiz window.
///
/// Owns the session and the feedback line; the question bank is shared and
/// never mutated.
#[derive(Clone)]
pub struct QuizService {
    bank: Arc<QuestionBank>,
    session: QuizSession,
    clock: Clock,
    rng: StdRng,
    shuffle: bool,
    feedback: String,
}

impl QuizService {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, settings: QuizSettings, clock: Clock) -> Self {
        let feedback = bank.load_failure().unwrap_or_default().to_owned();
        Self {
            bank,
            session: QuizSession::new(settings),
            clock,
            rng: StdRng::from_os_rng(),
            shuffle: true,
            feedback,
        }
    }

    /// Use a seeded generator so rounds come out in a reproducible order.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn view(&self) -> QuizView {
        QuizView::from_session(&self.session, &self.feedback)
    }

    /// Reset the score, reshuffle and show the first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if a round is already running.
    pub fn start(&mut self) -> Result<QuizView, QuizServiceError> {
        let round = RoundBuilder::new(self.bank.pairs(), self.session.settings())
            .with_shuffle(self.shuffle)
            .build(&mut self.rng);
        let planned = round.len();
        let phase = self.session.start(round, self.clock.now())?;
        log::debug!("quiz started with {planned} question(s)");

        self.feedback = match (self.bank.load_failure(), phase) {
            (Some(message), _) => message.to_owned(),
            (None, QuizPhase::Finished) => FINISHED_PROMPT.to_owned(),
            (None, _) => String::new(),
        };
        if phase == QuizPhase::Finished {
            self.log_finished();
        }
        Ok(self.view())
    }

    /// Score `answer` against the current question and move on.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` when no round is running.
    pub fn submit_answer(&mut self, answer: &str) -> Result<AnswerOutcome, QuizServiceError> {
        let outcome = self.session.submit_answer(answer, self.clock.now())?;
        if outcome.summary.is_some() {
            self.feedback = FINISHED_PROMPT.to_owned();
            self.log_finished();
        } else {
            self.feedback = outcome.verdict.message();
        }
        Ok(outcome)
    }

    fn log_finished(&self) {
        if let Some(summary) = self.session.summary() {
            log::info!(
                "quiz finished: {} after {} question(s)",
                summary.score_label(),
                summary.asked()
            );
        }
    }
}
