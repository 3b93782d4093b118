//! Profile progression
//!
//! Folds a finished game into the lifetime profile: per-difficulty word
//! statistics, aggregate totals, experience, and level. Experience never
//! decreases; the level is a pure function of experience.

use crate::core::GameMode;
use crate::profile::{GameResult, UserProfile};

/// Apply one finished game to the profile
///
/// `prior_history` is the stored game history *before* this result is
/// appended; it feeds the favorite-mode tally.
pub fn apply_game_result(
    profile: &mut UserProfile,
    result: &GameResult,
    prior_history: &[GameResult],
) {
    let stats = &mut profile.stats;

    for outcome in &result.word_outcomes {
        let word_stats = stats.word_stats.entry(outcome.difficulty).or_default();
        word_stats.average_time_seconds = running_average(
            word_stats.average_time_seconds,
            word_stats.played,
            outcome.time_spent_seconds,
        );
        word_stats.played += 1;
        if outcome.correct {
            word_stats.correct += 1;
        }
    }

    stats.average_score = running_average(
        stats.average_score,
        stats.total_games_played,
        result.score,
    );
    stats.total_games_played += 1;
    stats.total_words_guessed += result.total_words;
    stats.total_correct += result.total_correct;
    stats.best_streak = stats.best_streak.max(result.max_streak);
    stats.time_played_seconds += result.duration_seconds;
    stats.favorite_mode = favorite_mode(prior_history, result.mode);

    profile.experience += experience_gain(result);
    profile.level = calculate_level(profile.experience);
}

/// `round((old_avg * old_count + sample) / (old_count + 1))`
fn running_average(old_avg: u32, old_count: u32, sample: u32) -> u32 {
    let total = f64::from(old_avg) * f64::from(old_count) + f64::from(sample);
    (total / f64::from(old_count + 1)).round() as u32
}

/// Experience earned by one game
///
/// `score*2 + max_streak*5 + total_correct*3`, plus the difficulty weight
/// of every correctly guessed word.
#[must_use]
pub fn experience_gain(result: &GameResult) -> u64 {
    let base = u64::from(result.score) * 2
        + u64::from(result.max_streak) * 5
        + u64::from(result.total_correct) * 3;

    let difficulty_bonus: u64 = result
        .word_outcomes
        .iter()
        .filter(|o| o.correct)
        .map(|o| o.difficulty.experience_weight())
        .sum();

    base + difficulty_bonus
}

/// Level reached at a given lifetime experience
///
/// Level L is reached at `100 * L * (L - 1) / 2` experience: level 2 at
/// 100, level 3 at 300, level 4 at 600, and so on.
#[must_use]
pub fn calculate_level(experience: u64) -> u32 {
    let mut level: u32 = 1;
    let mut next_threshold: u64 = 100;

    while experience >= next_threshold {
        level += 1;
        next_threshold += u64::from(level) * 100;
    }

    level
}

/// Most-played mode over the stored history plus the game being recorded
///
/// Ties go to the earliest mode in declaration order.
fn favorite_mode(prior_history: &[GameResult], current: GameMode) -> GameMode {
    let mut best = GameMode::Classic;
    let mut best_count = 0;

    for mode in GameMode::ALL {
        let count = prior_history.iter().filter(|g| g.mode == mode).count()
            + usize::from(mode == current);
        if count > best_count {
            best = mode;
            best_count = count;
        }
    }

    best
}
