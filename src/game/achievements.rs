//! Achievement catalog and evaluation
//!
//! Each achievement is a predicate over a finished game and the updated
//! lifetime statistics. Evaluation is idempotent: unlocked entries are
//! skipped, so re-running over the same state never re-unlocks anything.

use crate::core::{DifficultyLevel, GameMode};
use crate::profile::{Achievement, GameResult, PlayerStats};
use chrono::Utc;

/// id, name, description, icon
const CATALOG: &[(&str, &str, &str, &str)] = &[
    ("firstGame", "First Steps", "Play your first game", "👶"),
    ("streak5", "On a Roll", "Get a 5-word streak", "🔥"),
    ("streak10", "Unstoppable", "Get a 10-word streak", "🛑"),
    ("score100", "Century", "Score 100 points in a single game", "💯"),
    (
        "beginnerMaster",
        "Beginner Master",
        "Get 50 correct beginner words",
        "🎓",
    ),
    (
        "expertMaster",
        "Expert Master",
        "Get 25 correct expert words",
        "👑",
    ),
    (
        "speedDemon",
        "Speed Demon",
        "Complete Time Attack with 50+ points",
        "🏃",
    ),
    (
        "pureSkill",
        "Pure Skill",
        "Complete a 10+ word game without hints",
        "🧠",
    ),
    ("marathon", "Marathon Player", "Play for 30 minutes total", "⏰"),
    (
        "perfectionist",
        "Perfectionist",
        "Get 100% accuracy in a 10+ word game",
        "✨",
    ),
];

/// The full locked catalog for a fresh profile
#[must_use]
pub fn default_achievements() -> Vec<Achievement> {
    CATALOG
        .iter()
        .map(|&(id, name, description, icon)| Achievement {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            is_unlocked: false,
            unlocked_at: None,
        })
        .collect()
}

/// Unlock every locked achievement whose condition now holds
///
/// `stats` must already include this game (post-update), since the
/// cumulative conditions read lifetime totals. Returns the newly unlocked
/// achievements, stamped with the current time.
pub fn evaluate(
    achievements: &mut [Achievement],
    result: &GameResult,
    stats: &PlayerStats,
) -> Vec<Achievement> {
    let now = Utc::now();
    let mut newly_unlocked = Vec::new();

    for achievement in achievements.iter_mut() {
        if achievement.is_unlocked {
            continue;
        }
        if qualifies(&achievement.id, result, stats) {
            achievement.is_unlocked = true;
            achievement.unlocked_at = Some(now);
            newly_unlocked.push(achievement.clone());
        }
    }

    newly_unlocked
}

fn qualifies(id: &str, result: &GameResult, stats: &PlayerStats) -> bool {
    match id {
        "firstGame" => true,
        "streak5" => result.max_streak >= 5,
        "streak10" => result.max_streak >= 10,
        "score100" => result.score >= 100,
        "beginnerMaster" => stats.correct_at(DifficultyLevel::Beginner) >= 50,
        "expertMaster" => stats.correct_at(DifficultyLevel::Expert) >= 25,
        "speedDemon" => result.mode == GameMode::TimeAttack && result.score >= 50,
        "pureSkill" => result.hints_used == 0 && result.total_words >= 10,
        "marathon" => stats.time_played_seconds >= 1800,
        "perfectionist" => result.total_words >= 10 && result.total_correct == result.total_words,
        _ => false,
    }
}
