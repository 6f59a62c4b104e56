use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::{QuestionSet, QuizSettings};
use quiz_core::time::fixed_clock;
use quiz_core::{CountryFilter, NameRecord, QuizPhase};
use services::{CountryService, CountryServiceError, QuestionBank, QuizService};
use storage::{InMemoryRepository, NameRepository, StorageError};

fn numbered_questions(n: usize) -> QuestionSet {
    let source: String = (1..=n).map(|i| format!("Question {i}?|Answer {i}\n")).collect();
    QuestionSet::parse(&source)
}

#[tokio::test]
async fn full_round_from_repository() {
    let repo = InMemoryRepository::with_questions(numbered_questions(12));
    let bank = Arc::new(QuestionBank::load(&repo).await);
    let mut quiz = QuizService::new(bank, QuizSettings::default(), fixed_clock()).with_seed(3);

    quiz.start().unwrap();
    let mut answered = 0;
    while quiz.view().can_answer {
        // Every other answer right, the rest wrong.
        let expected = quiz
            .session()
            .current_question()
            .map(|pair| pair.answer().as_str().to_uppercase())
            .unwrap();
        let reply = if answered % 2 == 0 { expected } else { String::from("?") };
        quiz.submit_answer(&reply).unwrap();
        answered += 1;
    }

    assert_eq!(answered, 10);
    let summary = *quiz.session().summary().unwrap();
    assert_eq!(summary.score(), 5);
    assert_eq!(summary.asked(), 10);
    assert_eq!(
        quiz.view().question_text,
        "Quiz finished. Final score is 5/10"
    );

    // A finished round only restarts through `start`.
    assert!(quiz.submit_answer("Answer 1").is_err());
    let view = quiz.start().unwrap();
    assert_eq!(view.phase, QuizPhase::Running);
    assert_eq!(view.score_text, "Score: 0");
}

#[tokio::test]
async fn short_bank_finishes_when_exhausted() {
    let repo = InMemoryRepository::with_questions(numbered_questions(3));
    let bank = Arc::new(QuestionBank::load(&repo).await);
    let mut quiz = QuizService::new(bank, QuizSettings::default(), fixed_clock());

    quiz.start().unwrap();
    for _ in 0..3 {
        quiz.submit_answer("wrong").unwrap();
    }
    let view = quiz.view();
    assert_eq!(view.phase, QuizPhase::Finished);
    assert_eq!(view.progress, (3, 10));
}

struct UnreadableNames;

#[async_trait]
impl NameRepository for UnreadableNames {
    async fn load_names(&self) -> Result<Vec<NameRecord>, StorageError> {
        Err(StorageError::Unreadable {
            path: "countries.txt".into(),
            reason: "permission denied".to_owned(),
        })
    }
}

#[tokio::test]
async fn unreadable_names_produce_no_report() {
    let service = CountryService::new(Arc::new(UnreadableNames), CountryFilter::default());
    let err = service.report().await.unwrap_err();
    assert!(matches!(err, CountryServiceError::Storage(StorageError::Unreadable { .. })));
}
