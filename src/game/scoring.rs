//! Reward calculation
//!
//! Points for a correct guess are a deterministic function of answer
//! speed, the streak going into the guess, and the word's difficulty.

use crate::core::DifficultyLevel;

/// Points for a correct guess
///
/// `base = 10 + time_bonus + floor(streak * 0.1)`, scaled by the
/// difficulty multiplier and floored. Elapsed time is measured from when
/// the word was presented to when the guess was submitted.
///
/// # Examples
/// ```
/// use ipa_master::core::DifficultyLevel;
/// use ipa_master::game::scoring::compute_points;
///
/// assert_eq!(compute_points(3.0, 0, DifficultyLevel::Beginner), 15);
/// assert_eq!(compute_points(12.0, 20, DifficultyLevel::Expert), 26);
/// ```
#[must_use]
pub fn compute_points(time_elapsed_seconds: f64, streak: u32, difficulty: DifficultyLevel) -> u32 {
    let base = 10 + time_bonus(time_elapsed_seconds) + streak / 10;
    (f64::from(base) * difficulty.score_multiplier()).floor() as u32
}

fn time_bonus(elapsed: f64) -> u32 {
    if elapsed < 5.0 {
        5
    } else if elapsed < 10.0 {
        3
    } else if elapsed < 15.0 {
        1
    } else {
        0
    }
}
