//! IPA Master
//!
//! A terminal vocabulary quiz: the game shows a phonetic transcription and
//! the player types the word it spells. Scoring rewards speed, streaks,
//! and difficulty; finished games feed a persistent profile with lifetime
//! statistics, experience levels, and achievements.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ipa_master::core::GameMode;
//! use ipa_master::dictionary::Dictionary;
//! use ipa_master::game::{GameSession, GameSettings};
//!
//! let dictionary = Dictionary::embedded();
//! let mut session = GameSession::new(
//!     &dictionary,
//!     GameSettings {
//!         mode: GameMode::Classic,
//!         difficulty: None,
//!     },
//! )
//! .unwrap();
//!
//! println!("guess the word for /{}/", session.current_word().transcription());
//! let feedback = session.submit_guess("cat").unwrap();
//! println!("correct: {}", feedback.is_correct);
//! ```

// Core domain types
pub mod core;

// Word source: loading, classification, shuffle-bag draws
pub mod dictionary;

// The quiz engine: session, scoring, achievements, progression
pub mod game;

// Player profile and persistence
pub mod profile;

// Terminal output formatting
pub mod output;

// Interactive TUI game client
pub mod interactive;
