//! Durable profile storage
//!
//! The profile and game history are JSON files under the platform data
//! directory. Reads of missing files yield defaults so a first run needs
//! no setup; write failures are typed and propagate to the caller without
//! aborting a running game.

use super::{Achievement, GameResult, UserProfile};
use crate::game::{achievements, progression};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Maximum stored game results; the oldest entries are evicted first
pub const HISTORY_CAP: usize = 100;

/// Errors raised by the profile store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no platform data directory available")]
    NoDataDir,

    #[error("profile store I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("profile store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Handle to the on-disk profile data
///
/// Passed explicitly to whoever needs persistence; there is no global
/// store instance.
#[derive(Debug)]
pub struct ProfileStore {
    data_dir: PathBuf,
}

impl ProfileStore {
    /// Open the store in the platform data directory
    ///
    /// # Errors
    /// Returns [`StoreError::NoDataDir`] if the platform reports no data
    /// directory, or an I/O error if it cannot be created.
    pub fn open() -> Result<Self, StoreError> {
        let data_dir = dirs::data_dir()
            .ok_or(StoreError::NoDataDir)?
            .join("ipa-master");
        Self::with_dir(data_dir)
    }

    /// Open the store in an explicit directory
    ///
    /// # Errors
    /// Returns an I/O error if the directory cannot be created.
    pub fn with_dir(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn profile_path(&self) -> PathBuf {
        self.data_dir.join("profile.json")
    }

    fn history_path(&self) -> PathBuf {
        self.data_dir.join("history.json")
    }

    /// Read the profile; a missing file yields a fresh default
    ///
    /// # Errors
    /// Propagates I/O failures other than a missing file, and corrupt
    /// JSON.
    pub fn load_profile(&self) -> Result<UserProfile, StoreError> {
        match fs::read_to_string(self.profile_path()) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(UserProfile::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist the profile
    ///
    /// # Errors
    /// Propagates I/O and serialization failures.
    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(profile)?;
        fs::write(self.profile_path(), contents)?;
        Ok(())
    }

    /// Read the game history; a missing file yields an empty list
    ///
    /// # Errors
    /// Propagates I/O failures other than a missing file, and corrupt
    /// JSON.
    pub fn load_history(&self) -> Result<Vec<GameResult>, StoreError> {
        match fs::read_to_string(self.history_path()) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist the game history
    ///
    /// # Errors
    /// Propagates I/O and serialization failures.
    pub fn save_history(&self, history: &[GameResult]) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(history)?;
        fs::write(self.history_path(), contents)?;
        Ok(())
    }

    /// Fold a finished game into the stored profile and history
    ///
    /// One synchronous read-modify-write: progression first, achievement
    /// evaluation against the post-update statistics, then the history
    /// append with FIFO eviction past [`HISTORY_CAP`]. Returns the newly
    /// unlocked achievements.
    ///
    /// # Errors
    /// Propagates store failures; the caller's game state is untouched and
    /// the session can finish without progression.
    pub fn record_game(&self, result: GameResult) -> Result<Vec<Achievement>, StoreError> {
        let mut profile = self.load_profile()?;
        let mut history = self.load_history()?;

        progression::apply_game_result(&mut profile, &result, &history);
        let newly_unlocked =
            achievements::evaluate(&mut profile.achievements, &result, &profile.stats);

        history.push(result);
        if history.len() > HISTORY_CAP {
            let excess = history.len() - HISTORY_CAP;
            history.drain(..excess);
        }

        self.save_profile(&profile)?;
        self.save_history(&history)?;
        Ok(newly_unlocked)
    }

    /// Replace all stored data with a fresh profile and empty history
    ///
    /// # Errors
    /// Propagates I/O and serialization failures.
    pub fn reset(&self) -> Result<(), StoreError> {
        self.save_profile(&UserProfile::default())?;
        self.save_history(&[])?;
        Ok(())
    }

    /// Pretty JSON dump of everything stored, for export
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn export_json(&self) -> Result<String, StoreError> {
        let profile = self.load_profile()?;
        let history = self.load_history()?;
        Ok(serde_json::to_string_pretty(&serde_json::json!({
            "profile": profile,
            "gameHistory": history,
        }))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameMode;
    use chrono::Utc;
    use tempfile::TempDir;

    fn store() -> (TempDir, ProfileStore) {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::with_dir(dir.path().join("data")).unwrap();
        (dir, store)
    }

    fn result(score: u32) -> GameResult {
        GameResult {
            mode: GameMode::Classic,
            score,
            max_streak: 2,
            total_words: 4,
            total_correct: 3,
            hints_used: 0,
            duration_seconds: 30,
            timestamp: Utc::now(),
            word_outcomes: Vec::new(),
        }
    }

    #[test]
    fn missing_files_read_as_defaults() {
        let (_dir, store) = store();
        assert_eq!(store.load_profile().unwrap(), UserProfile::default());
        assert!(store.load_history().unwrap().is_empty());
    }

    #[test]
    fn profile_round_trips() {
        let (_dir, store) = store();
        let mut profile = UserProfile::new("Ada");
        profile.experience = 250;
        profile.level = 2;

        store.save_profile(&profile).unwrap();
        assert_eq!(store.load_profile().unwrap(), profile);
    }

    #[test]
    fn history_round_trips() {
        let (_dir, store) = store();
        let history = vec![result(10), result(20)];

        store.save_history(&history).unwrap();
        assert_eq!(store.load_history().unwrap(), history);
    }

    #[test]
    fn record_game_updates_profile_and_history() {
        let (_dir, store) = store();

        let newly = store.record_game(result(40)).unwrap();
        assert!(newly.iter().any(|a| a.id == "firstGame"));

        let profile = store.load_profile().unwrap();
        assert_eq!(profile.stats.total_games_played, 1);
        assert_eq!(profile.stats.total_words_guessed, 4);
        assert!(profile.experience > 0);

        let history = store.load_history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].score, 40);
    }

    #[test]
    fn history_is_capped_fifo() {
        let (_dir, store) = store();
        let old: Vec<GameResult> = (0..HISTORY_CAP as u32).map(result).collect();
        store.save_history(&old).unwrap();

        store.record_game(result(9999)).unwrap();

        let history = store.load_history().unwrap();
        assert_eq!(history.len(), HISTORY_CAP);
        // The oldest entry (score 0) was evicted, the newest is last
        assert_eq!(history[0].score, 1);
        assert_eq!(history.last().unwrap().score, 9999);
    }

    #[test]
    fn reset_restores_defaults() {
        let (_dir, store) = store();
        store.record_game(result(40)).unwrap();

        store.reset().unwrap();
        assert_eq!(store.load_profile().unwrap(), UserProfile::default());
        assert!(store.load_history().unwrap().is_empty());
    }

    #[test]
    fn export_contains_profile_and_history() {
        let (_dir, store) = store();
        store.record_game(result(40)).unwrap();

        let json = store.export_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("profile").is_some());
        assert_eq!(value["gameHistory"].as_array().unwrap().len(), 1);
    }
}
