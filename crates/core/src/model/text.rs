use std::fmt;
use std::marker::PhantomData;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("text must not be blank")]
    Blank,
}

/// Non-blank text tagged with the side of the pair it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text<T>(String, PhantomData<T>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerSide;

pub type QuestionText = Text<QuestionSide>;
pub type AnswerText = Text<AnswerSide>;

impl<T> Text<T> {
    /// Surrounding whitespace is dropped; inner whitespace is kept.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Blank` for empty or whitespace-only input.
    pub fn parse(s: impl Into<String>) -> Result<Self, TextError> {
        let s = s.into();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TextError::Blank);
        }
        Ok(Self(trimmed.to_owned(), PhantomData))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T> fmt::Display for Text<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
