use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("questions per game must be at least 1")]
    ZeroQuestionsPerGame,
}

/// Per-game knobs for the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    questions_per_game: u32,
}

impl QuizSettings {
    pub const DEFAULT_QUESTIONS_PER_GAME: u32 = 10;

    /// # Errors
    ///
    /// Returns `SettingsError::ZeroQuestionsPerGame` when `questions_per_game` is 0.
    pub fn new(questions_per_game: u32) -> Result<Self, SettingsError> {
        if questions_per_game == 0 {
            return Err(SettingsError::ZeroQuestionsPerGame);
        }
        Ok(Self { questions_per_game })
    }

    #[must_use]
    pub fn questions_per_game(&self) -> u32 {
        self.questions_per_game
    }

    /// The cap as a length bound for slicing the shuffled set.
    #[must_use]
    pub fn cap(&self) -> usize {
        usize::try_from(self.questions_per_game).unwrap_or(usize::MAX)
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            questions_per_game: Self::DEFAULT_QUESTIONS_PER_GAME,
        }
    }
}
