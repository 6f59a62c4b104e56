use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({score}) exceeds questions asked ({asked})")]
    ScoreExceedsAsked { score: u32, asked: u32 },

    #[error("questions asked ({asked}) exceeds the per-game cap ({cap})")]
    AskedExceedsCap { asked: u32, cap: u32 },
}

/// Result of one finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    score: u32,
    asked: u32,
    cap: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// # Errors
    ///
    /// Returns `QuizSummaryError` when the counts or timestamps are inconsistent.
    pub fn new(
        score: u32,
        asked: u32,
        cap: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, QuizSummaryError> {
        if completed_at < started_at {
            return Err(QuizSummaryError::InvalidTimeRange);
        }
        if score > asked {
            return Err(QuizSummaryError::ScoreExceedsAsked { score, asked });
        }
        if asked > cap {
            return Err(QuizSummaryError::AskedExceedsCap { asked, cap });
        }

        Ok(Self {
            score,
            asked,
            cap,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn asked(&self) -> u32 {
        self.asked
    }

    #[must_use]
    pub fn cap(&self) -> u32 {
        self.cap
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// `score/cap`, the way the finished screen reports it.
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.score, self.cap)
    }
}
