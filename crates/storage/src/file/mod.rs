//! Plain-text file sources, read once per `load_*` call.

mod names;
mod questions;

use std::io::ErrorKind;
use std::path::Path;

use crate::repository::StorageError;

pub use names::FileNameRepository;
pub use questions::FileQuestionRepository;

async fn read_source(path: &Path) -> Result<String, StorageError> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(contents),
        Err(err) if err.kind() == ErrorKind::NotFound => Err(StorageError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(err) => Err(StorageError::Unreadable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }),
    }
}
