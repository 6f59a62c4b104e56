use thiserror::Error;

use crate::countries::FilterError;
use crate::model::{QuestionLineError, QuizSummaryError, SettingsError, TextError};
use crate::quiz::QuizError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Text(#[from] TextError),
    #[error(transparent)]
    QuestionLine(#[from] QuestionLineError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Summary(#[from] QuizSummaryError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Filter(#[from] FilterError),
}
