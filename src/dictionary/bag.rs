//! Shuffle-bag word draws
//!
//! Guarantees every word in scope is seen exactly once per cycle before
//! any repeats: the pool is refilled with the full scope and reshuffled
//! whenever it runs dry, then drawn by popping from the end.

use super::{Dictionary, DictionaryError};
use crate::core::{DifficultyLevel, Word};
use rand::Rng;
use rand::seq::SliceRandom;

/// Randomized, non-repeating word source over a difficulty scope
#[derive(Debug)]
pub struct ShuffleBag<'a> {
    scope: Vec<&'a Word>,
    pool: Vec<&'a Word>,
    last_drawn: Option<&'a Word>,
}

impl<'a> ShuffleBag<'a> {
    /// Create a bag over a difficulty scope, or the whole dictionary
    ///
    /// # Errors
    /// Returns [`DictionaryError::EmptyPool`] when the scope holds no
    /// words; an empty scope is a configuration error, not a recoverable
    /// draw failure.
    pub fn new(
        dictionary: &'a Dictionary,
        scope: Option<DifficultyLevel>,
    ) -> Result<Self, DictionaryError> {
        let words = dictionary.words_in_scope(scope);
        if words.is_empty() {
            return Err(DictionaryError::EmptyPool { scope });
        }

        Ok(Self {
            scope: words,
            pool: Vec::new(),
            last_drawn: None,
        })
    }

    /// Number of words in the scope (one full cycle)
    #[must_use]
    pub fn scope_size(&self) -> usize {
        self.scope.len()
    }

    /// Draw the next word
    ///
    /// The sequence is unbounded; the pool refills and reshuffles each
    /// time it empties. Consecutive draws never repeat a word across the
    /// refill boundary unless the scope holds a single word.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'a Word {
        if self.pool.is_empty() {
            self.refill(rng);
        }

        // Cannot fail: the scope was validated non-empty at construction
        let word = self.pool.pop().expect("pool refilled from non-empty scope");
        self.last_drawn = Some(word);
        word
    }

    fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pool = self.scope.clone();
        self.pool.shuffle(rng);

        // Keep the cycle boundary from repeating the previous draw
        let repeats_previous = self.pool.len() > 1
            && match (self.last_drawn, self.pool.last()) {
                (Some(last), Some(next)) => last.spelling() == next.spelling(),
                _ => false,
            };
        if repeats_previous {
            let end = self.pool.len() - 1;
            self.pool.swap(0, end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn fixture() -> Dictionary {
        loader::parse(
            "cat,kæt\n\
             dog,dɔg\n\
             sun,sʌn\n\
             bed,bɛd\n\
             hat,hæt\n\
             red,ɹɛd\n",
        )
        .unwrap()
    }

    #[test]
    fn full_cycle_covers_every_word_exactly_once() {
        let dict = fixture();
        let mut bag = ShuffleBag::new(&dict, None).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let mut seen = HashSet::new();
        for _ in 0..bag.scope_size() {
            let word = bag.draw(&mut rng);
            assert!(seen.insert(word.spelling().to_string()), "repeat in cycle");
        }
        assert_eq!(seen.len(), dict.len());
    }

    #[test]
    fn consecutive_cycles_reshuffle_without_immediate_repeat() {
        let dict = fixture();
        let mut bag = ShuffleBag::new(&dict, None).unwrap();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut previous: Option<String> = None;
            for _ in 0..dict.len() * 4 {
                let word = bag.draw(&mut rng);
                if let Some(prev) = &previous {
                    assert_ne!(prev, word.spelling(), "immediate repeat (seed {seed})");
                }
                previous = Some(word.spelling().to_string());
            }
        }
    }

    #[test]
    fn single_word_scope_repeats() {
        let dict = loader::parse("cat,kæt\n").unwrap();
        let mut bag = ShuffleBag::new(&dict, None).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..5 {
            assert_eq!(bag.draw(&mut rng).spelling(), "cat");
        }
    }

    #[test]
    fn scoped_draws_stay_in_scope() {
        let dict = Dictionary::embedded();
        for level in DifficultyLevel::ALL {
            let mut bag = ShuffleBag::new(&dict, Some(level)).unwrap();
            let mut rng = StdRng::seed_from_u64(99);
            for _ in 0..bag.scope_size() * 2 {
                assert_eq!(bag.draw(&mut rng).difficulty(), level);
            }
        }
    }

    #[test]
    fn empty_scope_is_rejected_at_construction() {
        let dict = loader::parse("cat,kæt\n").unwrap();
        let result = ShuffleBag::new(&dict, Some(DifficultyLevel::Expert));
        assert!(matches!(
            result,
            Err(DictionaryError::EmptyPool {
                scope: Some(DifficultyLevel::Expert)
            })
        ));
    }
}
