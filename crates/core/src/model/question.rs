use thiserror::Error;

use super::text::{AnswerText, QuestionText, TextError};

/// Separator between the question and the answer on one line.
pub const FIELD_DELIMITER: char = '|';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionLineError {
    #[error("expected 2 fields separated by '|', found {found}")]
    FieldCount { found: usize },

    #[error("invalid question: {0}")]
    Question(#[source] TextError),

    #[error("invalid answer: {0}")]
    Answer(#[source] TextError),
}

/// One quiz record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPair {
    question: QuestionText,
    answer: AnswerText,
}

impl QuestionPair {
    #[must_use]
    pub fn new(question: QuestionText, answer: AnswerText) -> Self {
        Self { question, answer }
    }

    /// Parse a `question|answer` line.
    ///
    /// # Errors
    ///
    /// Returns `QuestionLineError::FieldCount` unless the line has exactly two fields,
    /// or a text error when either side is blank.
    pub fn parse_line(line: &str) -> Result<Self, QuestionLineError> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        let [question, answer] = fields.as_slice() else {
            return Err(QuestionLineError::FieldCount {
                found: fields.len(),
            });
        };

        let question = QuestionText::parse(*question).map_err(QuestionLineError::Question)?;
        let answer = AnswerText::parse(*answer).map_err(QuestionLineError::Answer)?;
        Ok(Self { question, answer })
    }

    #[must_use]
    pub fn question(&self) -> &QuestionText {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &AnswerText {
        &self.answer
    }

    /// Case-insensitive, whitespace-trimmed comparison against the stored answer.
    #[must_use]
    pub fn accepts(&self, submitted: &str) -> bool {
        normalize_answer(submitted) == normalize_answer(self.answer.as_str())
    }
}

#[must_use]
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Pairs parsed from a whole source, plus how many lines were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSet {
    pub pairs: Vec<QuestionPair>,
    pub skipped_lines: usize,
}

impl QuestionSet {
    /// Parse every line of `source`, skipping malformed ones.
    ///
    /// Blank lines are ignored without being counted as skipped.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let mut set = Self::default();
        for line in source.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match QuestionPair::parse_line(line) {
                Ok(pair) => set.pairs.push(pair),
                Err(_) => set.skipped_lines += 1,
            }
        }
        set
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

impl FromIterator<QuestionPair> for QuestionSet {
    fn from_iter<I: IntoIterator<Item = QuestionPair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
            skipped_lines: 0,
        }
    }
}
