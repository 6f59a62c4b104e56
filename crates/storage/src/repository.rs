use async_trait::async_trait;
use quiz_core::NameRecord;
use quiz_core::model::QuestionSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::file::{FileNameRepository, FileQuestionRepository};

/// Errors surfaced by source adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("source not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("could not read {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("in-memory source unavailable: {0}")]
    Poisoned(String),
}

/// Source of quiz question/answer pairs.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Load every well-formed pair in source order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read at all.
    async fn load_questions(&self) -> Result<QuestionSet, StorageError>;
}

/// Source of line-delimited names.
#[async_trait]
pub trait NameRepository: Send + Sync {
    /// Load every line, including blank ones, in source order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read at all.
    async fn load_names(&self) -> Result<Vec<NameRecord>, StorageError>;
}

/// Simple in-memory sources for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    questions: Arc<Mutex<QuestionSet>>,
    names: Arc<Mutex<Vec<NameRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_questions(questions: QuestionSet) -> Self {
        let repo = Self::new();
        if let Ok(mut guard) = repo.questions.lock() {
            *guard = questions;
        }
        repo
    }

    /// Replace the stored questions.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Poisoned` if the lock was poisoned.
    pub fn set_questions(&self, questions: QuestionSet) -> Result<(), StorageError> {
        let mut guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        *guard = questions;
        Ok(())
    }

    /// Replace the stored names.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Poisoned` if the lock was poisoned.
    pub fn set_names(&self, names: Vec<NameRecord>) -> Result<(), StorageError> {
        let mut guard = self
            .names
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        *guard = names;
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn load_questions(&self) -> Result<QuestionSet, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl NameRepository for InMemoryRepository {
    async fn load_names(&self) -> Result<Vec<NameRecord>, StorageError> {
        let guard = self
            .names
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        Ok(guard.clone())
    }
}

/// Aggregates the sources behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
    pub names: Arc<dyn NameRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let questions: Arc<dyn QuestionRepository> = Arc::new(repo.clone());
        let names: Arc<dyn NameRepository> = Arc::new(repo);
        Self { questions, names }
    }

    /// File-backed sources. Nothing is read until a `load_*` call.
    #[must_use]
    pub fn files(questions_path: impl AsRef<Path>, names_path: impl AsRef<Path>) -> Self {
        Self {
            questions: Arc::new(FileQuestionRepository::new(questions_path.as_ref())),
            names: Arc::new(FileNameRepository::new(names_path.as_ref())),
        }
    }
}
