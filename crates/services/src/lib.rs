#![forbid(unsafe_code)]

pub mod countries;
pub mod error;
pub mod quiz;

pub use quiz_core::Clock;

pub use countries::CountryService;
pub use error::{CountryServiceError, QuizServiceError};
pub use quiz::{QuestionBank, QuizService, QuizView, RoundBuilder};
