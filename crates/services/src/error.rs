//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::QuizError;
use storage::StorageError;

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Errors emitted by `CountryService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CountryServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
