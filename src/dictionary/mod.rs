//! Word source
//!
//! Loads `spelling,transcription` records, classifies each word into a
//! difficulty bucket, and serves randomized non-repeating draws through a
//! shuffle-bag. The quiz engine consumes words exclusively from here.

mod bag;
mod classifier;
mod embedded;
pub mod loader;

pub use bag::ShuffleBag;
pub use embedded::EN_US;

use crate::core::{DifficultyLevel, Word};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised by the word source
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary file: {0}")]
    Io(#[from] std::io::Error),

    /// No usable records survived parsing. Malformed lines are dropped
    /// silently, so an all-malformed file surfaces here.
    #[error("dictionary contains no usable records")]
    Empty,

    /// A game was requested over a difficulty scope with no words in it.
    #[error("no words available at the requested difficulty")]
    EmptyPool { scope: Option<DifficultyLevel> },
}

/// An immutable, loaded word list with an exact-spelling lookup index
#[derive(Debug)]
pub struct Dictionary {
    words: Vec<Word>,
    by_spelling: FxHashMap<String, usize>,
}

impl Dictionary {
    /// Build a dictionary from parsed words
    ///
    /// Later records with an already-seen spelling are dropped; the first
    /// record wins.
    ///
    /// # Errors
    /// Returns [`DictionaryError::Empty`] if no words remain.
    pub fn new(parsed: Vec<Word>) -> Result<Self, DictionaryError> {
        let mut words: Vec<Word> = Vec::with_capacity(parsed.len());
        let mut by_spelling = FxHashMap::default();

        for word in parsed {
            if !by_spelling.contains_key(word.spelling()) {
                by_spelling.insert(word.spelling().to_string(), words.len());
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, by_spelling })
    }

    /// The dictionary bundled into the binary
    ///
    /// # Panics
    /// Will not panic - the embedded word list is known to parse non-empty.
    #[must_use]
    pub fn embedded() -> Self {
        loader::parse(EN_US).expect("embedded dictionary parses non-empty")
    }

    /// All loaded words
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of loaded words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact-spelling lookup of a word's transcription
    ///
    /// This is the correctness oracle for guesses: a guess is right when
    /// its own transcription equals the current word's, so homophones of
    /// the answer are accepted.
    #[must_use]
    pub fn transcription_of(&self, spelling: &str) -> Option<&str> {
        self.by_spelling
            .get(spelling)
            .map(|&i| self.words[i].transcription())
    }

    /// Words in a difficulty scope, or every word when unscoped
    #[must_use]
    pub fn words_in_scope(&self, scope: Option<DifficultyLevel>) -> Vec<&Word> {
        match scope {
            None => self.words.iter().collect(),
            Some(level) => self
                .words
                .iter()
                .filter(|w| w.difficulty() == level)
                .collect(),
        }
    }

    /// Per-difficulty word counts, in level order
    #[must_use]
    pub fn counts_by_difficulty(&self) -> [(DifficultyLevel, usize); 4] {
        DifficultyLevel::ALL.map(|level| {
            let count = self
                .words
                .iter()
                .filter(|w| w.difficulty() == level)
                .count();
            (level, count)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_spellings_keep_first_record() {
        let dict = loader::parse("see,si\nsee,sej\n").unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.transcription_of("see"), Some("si"));
    }

    #[test]
    fn lookup_misses_return_none() {
        let dict = loader::parse("cat,kæt\n").unwrap();
        assert_eq!(dict.transcription_of("dog"), None);
    }

    #[test]
    fn embedded_dictionary_loads() {
        let dict = Dictionary::embedded();
        assert!(dict.len() > 100);
        assert_eq!(dict.transcription_of("cat"), Some("kæt"));
    }

    #[test]
    fn embedded_dictionary_covers_every_difficulty() {
        let dict = Dictionary::embedded();
        for (level, count) in dict.counts_by_difficulty() {
            assert!(count > 0, "no {level} words in the embedded dictionary");
        }
    }

    #[test]
    fn scope_filter_matches_difficulty() {
        let dict = Dictionary::embedded();
        for level in DifficultyLevel::ALL {
            for word in dict.words_in_scope(Some(level)) {
                assert_eq!(word.difficulty(), level);
            }
        }
    }

    #[test]
    fn unscoped_covers_all_words() {
        let dict = Dictionary::embedded();
        assert_eq!(dict.words_in_scope(None).len(), dict.len());
    }
}
