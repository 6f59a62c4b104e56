use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{QuestionPair, QuizSettings, QuizSummary, QuizSummaryError};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("a quiz is already running")]
    AlreadyRunning,

    #[error("no quiz is running")]
    NotRunning,

    #[error(transparent)]
    Summary(#[from] QuizSummaryError),
}

//
// ─── PHASE ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Nothing started yet.
    Idle,
    /// A question is on screen, waiting for an answer.
    Running,
    /// The cap was reached or the questions ran out.
    Finished,
}

//
// ─── ANSWER OUTCOME ───────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong { expected: String },
}

impl Verdict {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Verdict::Correct => "Correct!".to_owned(),
            Verdict::Wrong { expected } => format!("Wrong! The correct answer was: {expected}"),
        }
    }
}

/// What a single `submit_answer` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub verdict: Verdict,
    pub score: u32,
    /// Set when this answer ended the quiz.
    pub summary: Option<QuizSummary>,
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// One quiz playthrough.
///
/// The caller supplies the question order at `start`; the session only steps
/// through it. `current` always points at the question on screen while running,
/// and `asked` counts presented questions, so `asked == current + 1` in that phase.
#[derive(Debug, Clone)]
pub struct QuizSession {
    settings: QuizSettings,
    questions: Vec<QuestionPair>,
    current: usize,
    asked: u32,
    score: u32,
    phase: QuizPhase,
    started_at: Option<DateTime<Utc>>,
    summary: Option<QuizSummary>,
}

impl QuizSession {
    #[must_use]
    pub fn new(settings: QuizSettings) -> Self {
        Self {
            settings,
            questions: Vec::new(),
            current: 0,
            asked: 0,
            score: 0,
            phase: QuizPhase::Idle,
            started_at: None,
            summary: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Questions presented so far in this playthrough.
    #[must_use]
    pub fn asked(&self) -> u32 {
        self.asked
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of questions this playthrough will ask at most.
    #[must_use]
    pub fn planned(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn summary(&self) -> Option<&QuizSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionPair> {
        match self.phase {
            QuizPhase::Running => self.questions.get(self.current),
            QuizPhase::Idle | QuizPhase::Finished => None,
        }
    }

    /// Begin a playthrough over `ordered` (already shuffled by the caller).
    ///
    /// Anything past the per-game cap is dropped. An empty set finishes
    /// immediately with a score of zero.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadyRunning` while a playthrough is in progress.
    pub fn start(
        &mut self,
        mut ordered: Vec<QuestionPair>,
        now: DateTime<Utc>,
    ) -> Result<QuizPhase, QuizError> {
        if self.phase == QuizPhase::Running {
            return Err(QuizError::AlreadyRunning);
        }

        ordered.truncate(self.settings.cap());
        self.questions = ordered;
        self.current = 0;
        self.score = 0;
        self.asked = 0;
        self.started_at = Some(now);
        self.summary = None;

        if self.questions.is_empty() {
            self.finish(now)?;
        } else {
            self.asked = 1;
            self.phase = QuizPhase::Running;
        }
        Ok(self.phase)
    }

    /// Score the answer to the current question and advance.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotRunning` outside the running phase.
    pub fn submit_answer(
        &mut self,
        submitted: &str,
        now: DateTime<Utc>,
    ) -> Result<AnswerOutcome, QuizError> {
        let Some(pair) = self.current_question() else {
            return Err(QuizError::NotRunning);
        };

        let verdict = if pair.accepts(submitted) {
            Verdict::Correct
        } else {
            Verdict::Wrong {
                expected: pair.answer().as_str().to_owned(),
            }
        };
        let score = if verdict.is_correct() {
            self.score.saturating_add(1)
        } else {
            self.score
        };

        let next = self.current + 1;
        let cap_reached = self.asked >= self.settings.questions_per_game();
        if cap_reached || next >= self.questions.len() {
            // Build the summary first so a rejected one leaves the session as it was.
            let summary = self.summarize(score, now)?;
            self.score = score;
            self.summary = Some(summary);
            self.phase = QuizPhase::Finished;
        } else {
            self.score = score;
            self.current = next;
            self.asked = self.asked.saturating_add(1);
        }

        Ok(AnswerOutcome {
            verdict,
            score: self.score,
            summary: self.summary,
        })
    }

    fn finish(&mut self, now: DateTime<Utc>) -> Result<(), QuizError> {
        let summary = self.summarize(self.score, now)?;
        self.summary = Some(summary);
        self.phase = QuizPhase::Finished;
        Ok(())
    }

    /// The wall clock may step backwards mid-round, so completion is never
    /// recorded before the start.
    fn summarize(&self, score: u32, now: DateTime<Utc>) -> Result<QuizSummary, QuizError> {
        let started_at = self.started_at.unwrap_or(now);
        let summary = QuizSummary::new(
            score,
            self.asked,
            self.settings.questions_per_game(),
            started_at,
            now.max(started_at),
        )?;
        Ok(summary)
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
