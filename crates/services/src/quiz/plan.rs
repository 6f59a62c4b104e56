use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::{QuestionPair, QuizSettings};

/// Picks the questions for one playthrough.
pub struct RoundBuilder<'a> {
    bank: &'a [QuestionPair],
    settings: QuizSettings,
    shuffle: bool,
}

impl<'a> RoundBuilder<'a> {
    #[must_use]
    pub fn new(bank: &'a [QuestionPair], settings: QuizSettings) -> Self {
        Self {
            bank,
            settings,
            shuffle: true,
        }
    }

    /// Disable shuffling to keep the bank's order.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Shuffle a copy of the bank and keep at most `questions_per_game` of it.
    pub fn build<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<QuestionPair> {
        let mut round = self.bank.to_vec();
        if self.shuffle {
            round.shuffle(rng);
        }
        round.truncate(self.settings.cap());
        round
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank(n: usize) -> Vec<QuestionPair> {
        (0..n)
            .map(|i| QuestionPair::parse_line(&format!("Q{i}|A{i}")).unwrap())
            .collect()
    }

    #[test]
    fn caps_round_length() {
        let bank = bank(15);
        let mut rng = StdRng::seed_from_u64(7);
        let round = RoundBuilder::new(&bank, QuizSettings::default()).build(&mut rng);
        assert_eq!(round.len(), 10);
    }

    #[test]
    fn shuffled_round_is_a_permutation_subset() {
        let bank = bank(6);
        let mut rng = StdRng::seed_from_u64(11);
        let round = RoundBuilder::new(&bank, QuizSettings::default()).build(&mut rng);
        assert_eq!(round.len(), 6);
        for pair in &bank {
            assert!(round.contains(pair));
        }
    }

    #[test]
    fn unshuffled_round_keeps_order() {
        let bank = bank(4);
        let mut rng = StdRng::seed_from_u64(0);
        let round = RoundBuilder::new(&bank, QuizSettings::new(3).unwrap())
            .with_shuffle(false)
            .build(&mut rng);
        assert_eq!(round, bank[..3].to_vec());
    }

    #[test]
    fn same_seed_same_order() {
        let bank = bank(10);
        let a = RoundBuilder::new(&bank, QuizSettings::default())
            .build(&mut StdRng::seed_from_u64(42));
        let b = RoundBuilder::new(&bank, QuizSettings::default())
            .build(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
