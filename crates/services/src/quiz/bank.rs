use quiz_core::model::{QuestionPair, QuestionSet};
use storage::QuestionRepository;

/// User-facing message when the question source cannot be read.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load questions";

/// Questions loaded once at startup.
///
/// A failed load yields an empty bank that remembers the failure, so the quiz
/// stays usable (it finishes immediately) instead of aborting the program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    pairs: Vec<QuestionPair>,
    skipped_lines: usize,
    load_failed: bool,
}

impl QuestionBank {
    pub async fn load(source: &dyn QuestionRepository) -> Self {
        match source.load_questions().await {
            Ok(set) => {
                log::info!(
                    "loaded {} question(s), skipped {} line(s)",
                    set.len(),
                    set.skipped_lines
                );
                Self::from_set(set)
            }
            Err(err) => {
                log::warn!("{LOAD_FAILURE_MESSAGE}: {err}");
                Self::failed()
            }
        }
    }

    #[must_use]
    pub fn from_set(set: QuestionSet) -> Self {
        Self {
            pairs: set.pairs,
            skipped_lines: set.skipped_lines,
            load_failed: false,
        }
    }

    #[must_use]
    pub fn failed() -> Self {
        Self {
            load_failed: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn pairs(&self) -> &[QuestionPair] {
        &self.pairs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// The message to show when loading failed.
    #[must_use]
    pub fn load_failure(&self) -> Option<&'static str> {
        self.load_failed.then_some(LOAD_FAILURE_MESSAGE)
    }
}

impl FromIterator<QuestionPair> for QuestionBank {
    fn from_iter<I: IntoIterator<Item = QuestionPair>>(iter: I) -> Self {
        Self::from_set(iter.into_iter().collect())
    }
}
