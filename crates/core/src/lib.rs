#![forbid(unsafe_code)]

pub mod countries;
pub mod error;
pub mod model;
pub mod quiz;
pub mod time;

pub use countries::{CountryFilter, CountryReport, FilterError, NameRecord};
pub use error::Error;
pub use quiz::{AnswerOutcome, QuizError, QuizPhase, QuizSession, Verdict};
pub use time::Clock;
