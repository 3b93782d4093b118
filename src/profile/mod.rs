//! Player profile and game-history types
//!
//! Everything persisted between sessions lives here: lifetime statistics,
//! experience and level, the achievement list, and finished-game records.
//! The store submodule handles the JSON files themselves.

mod store;

pub use store::{HISTORY_CAP, ProfileStore, StoreError};

use crate::core::{DifficultyLevel, GameMode};
use crate::game::achievements::default_achievements;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The resolution of a single word within a game
///
/// Appended once per resolved word (correct guess or attempts exhausted)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordOutcome {
    pub word: String,
    pub difficulty: DifficultyLevel,
    pub correct: bool,
    pub time_spent_seconds: u32,
}

/// Immutable snapshot of a finished game
///
/// The sole artifact handed to achievement evaluation and profile
/// progression; the live session itself is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub mode: GameMode,
    pub score: u32,
    pub max_streak: u32,
    pub total_words: u32,
    pub total_correct: u32,
    pub hints_used: u32,
    pub duration_seconds: u64,
    pub timestamp: DateTime<Utc>,
    pub word_outcomes: Vec<WordOutcome>,
}

/// Lifetime per-difficulty word statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStats {
    pub played: u32,
    pub correct: u32,
    pub average_time_seconds: u32,
}

/// Lifetime aggregate statistics across all games
///
/// Raw cumulative counts are stored and the accuracy percentage is derived
/// on read, so repeated rounding never compounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub total_games_played: u32,
    pub total_words_guessed: u32,
    pub total_correct: u32,
    pub average_score: u32,
    pub best_streak: u32,
    pub time_played_seconds: u64,
    pub favorite_mode: GameMode,
    pub word_stats: BTreeMap<DifficultyLevel, WordStats>,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            total_games_played: 0,
            total_words_guessed: 0,
            total_correct: 0,
            average_score: 0,
            best_streak: 0,
            time_played_seconds: 0,
            favorite_mode: GameMode::Classic,
            word_stats: DifficultyLevel::ALL
                .into_iter()
                .map(|level| (level, WordStats::default()))
                .collect(),
        }
    }
}

impl PlayerStats {
    /// Overall accuracy across every attempted word, in whole percent
    #[must_use]
    pub fn accuracy_percentage(&self) -> u32 {
        if self.total_words_guessed == 0 {
            return 0;
        }
        let ratio = f64::from(self.total_correct) / f64::from(self.total_words_guessed);
        (ratio * 100.0).round() as u32
    }

    /// Lifetime correct count at one difficulty level
    #[must_use]
    pub fn correct_at(&self, level: DifficultyLevel) -> u32 {
        self.word_stats.get(&level).map_or(0, |s| s.correct)
    }
}

/// A single achievement, locked until its condition first holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub is_unlocked: bool,
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// The persistent player profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub level: u32,
    pub experience: u64,
    pub stats: PlayerStats,
    pub achievements: Vec<Achievement>,
}

impl UserProfile {
    /// A fresh level-1 profile with every achievement locked
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: 1,
            experience: 0,
            stats: PlayerStats::default(),
            achievements: default_achievements(),
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new("Player")
    }
}
