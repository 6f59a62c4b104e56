#![forbid(unsafe_code)]

pub mod file;
pub mod repository;

pub use repository::{
    InMemoryRepository, NameRepository, QuestionRepository, Storage, StorageError,
};
