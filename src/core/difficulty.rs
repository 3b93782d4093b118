//! Word difficulty levels
//!
//! A coarse complexity bucket derived from spelling length and phonetic
//! complexity. Levels are ordered from Beginner up to Expert.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty bucket for a dictionary word
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl DifficultyLevel {
    /// All levels in ascending order of complexity
    pub const ALL: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
    ];

    /// Score multiplier applied to points earned on a correct guess
    #[must_use]
    pub const fn score_multiplier(self) -> f64 {
        match self {
            Self::Beginner => 1.0,
            Self::Intermediate => 1.2,
            Self::Advanced => 1.5,
            Self::Expert => 2.0,
        }
    }

    /// Experience awarded per correctly guessed word of this level
    #[must_use]
    pub const fn experience_weight(self) -> u64 {
        match self {
            Self::Beginner => 2,
            Self::Intermediate => 3,
            Self::Advanced => 5,
            Self::Expert => 8,
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_complexity() {
        assert!(DifficultyLevel::Beginner < DifficultyLevel::Intermediate);
        assert!(DifficultyLevel::Intermediate < DifficultyLevel::Advanced);
        assert!(DifficultyLevel::Advanced < DifficultyLevel::Expert);
    }

    #[test]
    fn multipliers_increase_with_level() {
        let multipliers: Vec<f64> = DifficultyLevel::ALL
            .iter()
            .map(|d| d.score_multiplier())
            .collect();
        assert_eq!(multipliers, vec![1.0, 1.2, 1.5, 2.0]);
    }

    #[test]
    fn experience_weights() {
        assert_eq!(DifficultyLevel::Beginner.experience_weight(), 2);
        assert_eq!(DifficultyLevel::Intermediate.experience_weight(), 3);
        assert_eq!(DifficultyLevel::Advanced.experience_weight(), 5);
        assert_eq!(DifficultyLevel::Expert.experience_weight(), 8);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&DifficultyLevel::Expert).unwrap();
        assert_eq!(json, "\"expert\"");
    }
}
