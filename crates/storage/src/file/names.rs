use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quiz_core::NameRecord;

use super::read_source;
use crate::repository::{NameRepository, StorageError};

/// Reads one name per line from a text file.
#[derive(Debug, Clone)]
pub struct FileNameRepository {
    path: PathBuf,
}

impl FileNameRepository {
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
impl NameRepository for FileNameRepository {
    async fn load_names(&self) -> Result<Vec<NameRecord>, StorageError> {
        let contents = read_source(&self.path).await?;
        Ok(contents.lines().map(NameRecord::from).collect())
    }
}
