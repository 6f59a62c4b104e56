use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quiz_core::model::QuestionSet;

use super::read_source;
use crate::repository::{QuestionRepository, StorageError};

/// Reads `question|answer` lines from a text file.
#[derive(Debug, Clone)]
pub struct FileQuestionRepository {
    path: PathBuf,
}

impl FileQuestionRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionRepository for FileQuestionRepository {
    async fn load_questions(&self) -> Result<QuestionSet, StorageError> {
        let contents = read_source(&self.path).await?;
        let set = QuestionSet::parse(&contents);
        if set.skipped_lines > 0 {
            log::debug!(
                "skipped {} malformed line(s) in {}",
                set.skipped_lines,
                self.path.display()
            );
        }
        Ok(set)
    }
}
