//! Game session state machine
//!
//! Owns the live state of one game: the current word, score, streak,
//! attempt budget, hint flag, and optional countdown. All transitions go
//! through a handful of entry points; a finished session is terminal and
//! ignores further guesses and ticks.

use crate::core::{DifficultyLevel, GameMode, Word};
use crate::dictionary::{Dictionary, DictionaryError, ShuffleBag};
use crate::game::scoring::compute_points;
use crate::profile::{GameResult, WordOutcome};
use chrono::Utc;
use rand::rngs::ThreadRng;
use std::time::Instant;

/// Settings fixed at game start
#[derive(Debug, Clone, Copy)]
pub struct GameSettings {
    pub mode: GameMode,
    pub difficulty: Option<DifficultyLevel>,
}

/// Live state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    AwaitingGuess,
    Finished { won: bool },
}

/// Result of one guess submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessFeedback {
    pub is_correct: bool,
    pub should_continue: bool,
    pub kind: FeedbackKind,
}

/// What the UI should tell the player about the guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Correct; the game continues with the next word
    Correct { points: u32, streak: u32 },
    /// Correct, and the streak target was reached
    Won { points: u32 },
    /// Incorrect, with attempts left on this word
    TryAgain { attempts_remaining: u32 },
    /// Incorrect and out of attempts; the answer is revealed
    Revealed { word: String },
}

/// One live game
///
/// Created at game start, mutated only through its entry points, and
/// discarded once [`GameSession::to_result`] has captured the terminal
/// snapshot.
pub struct GameSession<'a> {
    dictionary: &'a Dictionary,
    bag: ShuffleBag<'a>,
    rng: ThreadRng,
    settings: GameSettings,
    status: SessionStatus,
    current_word: &'a Word,
    attempts: u32,
    score: u32,
    streak: u32,
    max_streak: u32,
    total_words: u32,
    total_correct: u32,
    hints_used: u32,
    hint_revealed: bool,
    time_remaining: Option<u32>,
    outcomes: Vec<WordOutcome>,
    started_at: Instant,
    word_started_at: Instant,
}

impl<'a> GameSession<'a> {
    /// Start a game over the given dictionary scope
    ///
    /// # Errors
    /// Returns [`DictionaryError::EmptyPool`] when the requested
    /// difficulty has no words.
    pub fn new(
        dictionary: &'a Dictionary,
        settings: GameSettings,
    ) -> Result<Self, DictionaryError> {
        let mut bag = ShuffleBag::new(dictionary, settings.difficulty)?;
        let mut rng = rand::rng();
        let first = bag.draw(&mut rng);
        let now = Instant::now();

        Ok(Self {
            dictionary,
            bag,
            rng,
            settings,
            status: SessionStatus::AwaitingGuess,
            current_word: first,
            attempts: 0,
            score: 0,
            streak: 0,
            max_streak: 0,
            total_words: 1,
            total_correct: 0,
            hints_used: 0,
            hint_revealed: false,
            time_remaining: settings.mode.time_limit_seconds(),
            outcomes: Vec::new(),
            started_at: now,
            word_started_at: now,
        })
    }

    /// Submit a guess for the current word
    ///
    /// Returns `None` once the session is finished, so a guess that loses
    /// the race against time expiry is dropped rather than mutating a
    /// terminal session. The guess is compared case-insensitively by
    /// transcription: it is correct when its own dictionary transcription
    /// equals the current word's, which accepts homophones.
    pub fn submit_guess(&mut self, raw: &str) -> Option<GuessFeedback> {
        if self.is_finished() {
            return None;
        }

        let guess = raw.trim().to_lowercase();
        let elapsed = self.word_started_at.elapsed().as_secs_f64();
        let correct = self
            .dictionary
            .transcription_of(&guess)
            .is_some_and(|t| t == self.current_word.transcription());

        self.attempts += 1;

        Some(if correct {
            self.resolve_correct(elapsed)
        } else {
            self.resolve_incorrect(elapsed)
        })
    }

    fn resolve_correct(&mut self, elapsed: f64) -> GuessFeedback {
        let points = compute_points(elapsed, self.streak, self.current_word.difficulty());
        self.push_outcome(true, elapsed);
        self.score += points;
        self.total_correct += 1;
        self.streak += 1;
        self.max_streak = self.max_streak.max(self.streak);

        if let Some(target) = self.settings.mode.target_streak()
            && self.streak >= target
        {
            self.status = SessionStatus::Finished { won: true };
            return GuessFeedback {
                is_correct: true,
                should_continue: false,
                kind: FeedbackKind::Won { points },
            };
        }

        self.advance_word();
        GuessFeedback {
            is_correct: true,
            should_continue: true,
            kind: FeedbackKind::Correct {
                points,
                streak: self.streak,
            },
        }
    }

    fn resolve_incorrect(&mut self, elapsed: f64) -> GuessFeedback {
        self.streak = 0;

        if self.attempts >= self.settings.mode.max_attempts() {
            self.push_outcome(false, elapsed);
            let revealed = self.current_word.spelling().to_string();
            self.advance_word();
            return GuessFeedback {
                is_correct: false,
                should_continue: true,
                kind: FeedbackKind::Revealed { word: revealed },
            };
        }

        GuessFeedback {
            is_correct: false,
            should_continue: true,
            kind: FeedbackKind::TryAgain {
                attempts_remaining: self.settings.mode.max_attempts() - self.attempts,
            },
        }
    }

    fn push_outcome(&mut self, correct: bool, elapsed: f64) {
        self.outcomes.push(WordOutcome {
            word: self.current_word.spelling().to_string(),
            difficulty: self.current_word.difficulty(),
            correct,
            time_spent_seconds: elapsed.round() as u32,
        });
    }

    fn advance_word(&mut self) {
        self.current_word = self.bag.draw(&mut self.rng);
        self.total_words += 1;
        self.attempts = 0;
        self.hint_revealed = false;
        self.word_started_at = Instant::now();
    }

    /// Reveal the hints for the current word
    ///
    /// One-time per word: the first call enables them and counts against
    /// the lifetime hint counter, repeat calls are no-ops. Returns whether
    /// this call newly enabled them.
    pub fn request_hint(&mut self) -> bool {
        if self.is_finished() || self.hint_revealed {
            return false;
        }
        self.hint_revealed = true;
        self.hints_used += 1;
        true
    }

    /// Advance the countdown by one second
    ///
    /// Inert for untimed modes and after the game has finished. Reaching
    /// zero ends the game as a loss.
    pub fn tick(&mut self) {
        if self.is_finished() {
            return;
        }
        if let Some(remaining) = self.time_remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                self.status = SessionStatus::Finished { won: false };
            }
        }
    }

    /// End the game now (player quit)
    pub fn end_game(&mut self) {
        if !self.is_finished() {
            self.status = SessionStatus::Finished { won: false };
        }
    }

    /// Snapshot the finished (or quitting) game for progression
    #[must_use]
    pub fn to_result(&self) -> GameResult {
        GameResult {
            mode: self.settings.mode,
            score: self.score,
            max_streak: self.max_streak,
            total_words: self.total_words,
            total_correct: self.total_correct,
            hints_used: self.hints_used,
            duration_seconds: self.started_at.elapsed().as_secs(),
            timestamp: Utc::now(),
            word_outcomes: self.outcomes.clone(),
        }
    }

    #[must_use]
    pub const fn settings(&self) -> GameSettings {
        self.settings
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.status, SessionStatus::Finished { .. })
    }

    #[must_use]
    pub const fn won(&self) -> bool {
        matches!(self.status, SessionStatus::Finished { won: true })
    }

    #[must_use]
    pub const fn current_word(&self) -> &'a Word {
        self.current_word
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub const fn max_streak(&self) -> u32 {
        self.max_streak
    }

    #[must_use]
    pub const fn total_words(&self) -> u32 {
        self.total_words
    }

    #[must_use]
    pub const fn total_correct(&self) -> u32 {
        self.total_correct
    }

    #[must_use]
    pub const fn hints_used(&self) -> u32 {
        self.hints_used
    }

    #[must_use]
    pub const fn hint_revealed(&self) -> bool {
        self.hint_revealed
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> u32 {
        self.settings.mode.max_attempts().saturating_sub(self.attempts)
    }

    #[must_use]
    pub const fn time_remaining(&self) -> Option<u32> {
        self.time_remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader;

    fn single_word_dict() -> Dictionary {
        loader::parse("cat,kæt\n").unwrap()
    }

    fn session(dict: &Dictionary, mode: GameMode) -> GameSession<'_> {
        GameSession::new(
            dict,
            GameSettings {
                mode,
                difficulty: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn correct_guess_scores_and_advances_streak() {
        let dict = single_word_dict();
        let mut game = session(&dict, GameMode::Classic);

        let feedback = game.submit_guess("cat").unwrap();
        assert!(feedback.is_correct);
        assert!(feedback.should_continue);
        assert_eq!(
            feedback.kind,
            FeedbackKind::Correct {
                points: 15,
                streak: 1
            }
        );
        assert_eq!(game.score(), 15);
        assert_eq!(game.streak(), 1);
        assert_eq!(game.total_correct(), 1);
        assert_eq!(game.total_words(), 2);
    }

    #[test]
    fn guesses_are_case_insensitive() {
        let dict = single_word_dict();
        let mut game = session(&dict, GameMode::Classic);
        assert!(game.submit_guess("  CAT ").unwrap().is_correct);
    }

    #[test]
    fn homophones_are_accepted() {
        let dict = loader::parse("see,si\nsea,si\n").unwrap();
        let mut game = session(&dict, GameMode::Classic);

        let other = if game.current_word().spelling() == "see" {
            "sea"
        } else {
            "see"
        };
        assert!(game.submit_guess(other).unwrap().is_correct);
    }

    #[test]
    fn wrong_guesses_burn_attempts_then_reveal() {
        let dict = loader::parse("cat,kæt\ndog,dɔg\n").unwrap();
        let mut game = session(&dict, GameMode::Classic);
        let first_word = game.current_word().spelling().to_string();

        let feedback = game.submit_guess("xyz").unwrap();
        assert_eq!(
            feedback.kind,
            FeedbackKind::TryAgain {
                attempts_remaining: 2
            }
        );
        assert_eq!(game.streak(), 0);

        let feedback = game.submit_guess("xyz").unwrap();
        assert_eq!(
            feedback.kind,
            FeedbackKind::TryAgain {
                attempts_remaining: 1
            }
        );

        let feedback = game.submit_guess("xyz").unwrap();
        assert_eq!(
            feedback.kind,
            FeedbackKind::Revealed {
                word: first_word.clone()
            }
        );
        assert!(feedback.should_continue);

        // Advanced to the other word with a fresh attempt budget
        assert_ne!(game.current_word().spelling(), first_word);
        assert_eq!(game.attempts_remaining(), 3);
        assert_eq!(game.total_words(), 2);
    }

    #[test]
    fn outcome_recorded_only_on_resolution() {
        let dict = loader::parse("cat,kæt\ndog,dɔg\n").unwrap();
        let mut game = session(&dict, GameMode::Classic);

        game.submit_guess("xyz");
        game.submit_guess("xyz");
        assert!(game.to_result().word_outcomes.is_empty());

        game.submit_guess("xyz");
        let outcomes = game.to_result().word_outcomes;
        assert_eq!(outcomes.len(), 1);
        assert!(!outcomes[0].correct);
    }

    #[test]
    fn wrong_guess_resets_streak() {
        let dict = single_word_dict();
        let mut game = session(&dict, GameMode::Classic);

        game.submit_guess("cat");
        assert_eq!(game.streak(), 1);

        game.submit_guess("xyz");
        assert_eq!(game.streak(), 0);
        assert_eq!(game.max_streak(), 1);
    }

    #[test]
    fn streak_target_wins_immediately() {
        let dict = single_word_dict();
        let mut game = session(&dict, GameMode::Streak10);

        for _ in 0..9 {
            let feedback = game.submit_guess("cat").unwrap();
            assert!(feedback.should_continue);
        }

        let feedback = game.submit_guess("cat").unwrap();
        assert!(matches!(feedback.kind, FeedbackKind::Won { .. }));
        assert!(!feedback.should_continue);
        assert!(game.won());
        // No further word was drawn after the winning guess
        assert_eq!(game.total_words(), 10);
    }

    #[test]
    fn countdown_expiry_finishes_as_loss() {
        let dict = single_word_dict();
        let mut game = session(&dict, GameMode::TimeAttack);
        assert_eq!(game.time_remaining(), Some(60));

        for _ in 0..59 {
            game.tick();
        }
        assert_eq!(game.time_remaining(), Some(1));
        assert!(!game.is_finished());

        game.tick();
        assert_eq!(game.time_remaining(), Some(0));
        assert!(game.is_finished());
        assert!(!game.won());

        // Further ticks and guesses are inert
        game.tick();
        assert_eq!(game.time_remaining(), Some(0));
        assert_eq!(game.submit_guess("cat"), None);
    }

    #[test]
    fn countdown_is_inert_without_time_limit() {
        let dict = single_word_dict();
        let mut game = session(&dict, GameMode::Classic);
        for _ in 0..120 {
            game.tick();
        }
        assert!(!game.is_finished());
        assert_eq!(game.time_remaining(), None);
    }

    #[test]
    fn hints_enable_once_per_word() {
        let dict = single_word_dict();
        let mut game = session(&dict, GameMode::Classic);

        assert!(game.request_hint());
        assert!(!game.request_hint());
        assert_eq!(game.hints_used(), 1);

        // A new word resets the flag but keeps the lifetime counter
        game.submit_guess("cat");
        assert!(!game.hint_revealed());
        assert!(game.request_hint());
        assert_eq!(game.hints_used(), 2);
    }

    #[test]
    fn quit_finishes_without_win() {
        let dict = single_word_dict();
        let mut game = session(&dict, GameMode::Classic);
        game.submit_guess("cat");
        game.end_game();

        assert!(game.is_finished());
        assert!(!game.won());
        assert_eq!(game.submit_guess("cat"), None);

        let result = game.to_result();
        assert_eq!(result.mode, GameMode::Classic);
        assert_eq!(result.score, 15);
        assert_eq!(result.total_words, 2);
        assert_eq!(result.total_correct, 1);
        assert_eq!(result.word_outcomes.len(), 1);
    }

    #[test]
    fn empty_scope_fails_at_creation() {
        let dict = single_word_dict();
        let result = GameSession::new(
            &dict,
            GameSettings {
                mode: GameMode::Classic,
                difficulty: Some(DifficultyLevel::Expert),
            },
        );
        assert!(matches!(result, Err(DictionaryError::EmptyPool { .. })));
    }

    #[test]
    fn scoped_session_only_draws_in_scope() {
        let dict = Dictionary::embedded();
        let mut game = GameSession::new(
            &dict,
            GameSettings {
                mode: GameMode::TimeAttack,
                difficulty: Some(DifficultyLevel::Beginner),
            },
        )
        .unwrap();

        for _ in 0..50 {
            assert_eq!(
                game.current_word().difficulty(),
                DifficultyLevel::Beginner
            );
            game.submit_guess("definitely-wrong");
        }
    }
}
