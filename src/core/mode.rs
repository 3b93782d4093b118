//! Game modes
//!
//! A mode fixes the per-word attempt budget, the optional countdown, and
//! the optional streak target that ends the game as a win.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selectable game mode
///
/// The declaration order is the documented tie-break order for the
/// favorite-mode statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameMode {
    Classic,
    TimeAttack,
    Streak10,
    Streak50,
    Streak100,
}

impl GameMode {
    /// All modes, in tie-break order
    pub const ALL: [Self; 5] = [
        Self::Classic,
        Self::TimeAttack,
        Self::Streak10,
        Self::Streak50,
        Self::Streak100,
    ];

    /// Guess attempts allowed per word
    #[must_use]
    pub const fn max_attempts(self) -> u32 {
        match self {
            Self::Classic => 3,
            _ => 1,
        }
    }

    /// Countdown length, if the mode is time-limited
    #[must_use]
    pub const fn time_limit_seconds(self) -> Option<u32> {
        match self {
            Self::TimeAttack => Some(60),
            _ => None,
        }
    }

    /// Streak that ends the game as a win, for streak modes
    #[must_use]
    pub const fn target_streak(self) -> Option<u32> {
        match self {
            Self::Streak10 => Some(10),
            Self::Streak50 => Some(50),
            Self::Streak100 => Some(100),
            Self::Classic | Self::TimeAttack => None,
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::TimeAttack => "Time Attack",
            Self::Streak10 => "10 Streak Challenge",
            Self::Streak50 => "50 Streak Challenge",
            Self::Streak100 => "100 Streak Challenge",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
