use quiz_core::{QuizPhase, QuizSession};

pub const IDLE_PROMPT: &str = "Press 'Start Quiz' to begin.";
pub const FINISHED_PROMPT: &str = "Press 'Start Quiz' to play again.";

/// Everything a front end needs to draw the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub phase: QuizPhase,
    pub question_text: String,
    pub score_text: String,
    pub feedback: String,
    /// Questions presented so far and the per-game cap.
    pub progress: (u32, u32),
    pub can_start: bool,
    pub can_answer: bool,
}

impl QuizView {
    pub(crate) fn from_session(session: &QuizSession, feedback: &str) -> Self {
        let phase = session.phase();
        let cap = session.settings().questions_per_game();
        let question_text = match phase {
            QuizPhase::Idle => IDLE_PROMPT.to_owned(),
            QuizPhase::Running => session
                .current_question()
                .map(|pair| pair.question().as_str().to_owned())
                .unwrap_or_default(),
            QuizPhase::Finished => format!(
                "Quiz finished. Final score is {}/{cap}",
                session.score()
            ),
        };

        Self {
            phase,
            question_text,
            score_text: format!("Score: {}", session.score()),
            feedback: feedback.to_owned(),
            progress: (session.asked(), cap),
            can_start: phase != QuizPhase::Running,
            can_answer: phase == QuizPhase::Running,
        }
    }
}
