mod question;
mod settings;
mod summary;
mod text;

pub use question::{FIELD_DELIMITER, QuestionLineError, QuestionPair, QuestionSet, normalize_answer};
pub use settings::{QuizSettings, SettingsError};
pub use summary::{QuizSummary, QuizSummaryError};
pub use text::{AnswerSide, AnswerText, QuestionSide, QuestionText, Text, TextError};
