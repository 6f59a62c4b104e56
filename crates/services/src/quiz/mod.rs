mod bank;
mod plan;
mod service;
mod view;

// Public API of the quiz subsystem.
pub use crate::error::QuizServiceError;
pub use bank::{LOAD_FAILURE_MESSAGE, QuestionBank};
pub use plan::RoundBuilder;
pub use service::QuizService;
pub use view::{FINISHED_PROMPT, IDLE_PROMPT, QuizView};
