//! The quiz engine
//!
//! Session state machine, reward calculation, achievement evaluation,
//! and profile progression. Everything here is deterministic given its
//! inputs apart from the shuffle-bag draws the session requests.

pub mod achievements;
pub mod progression;
pub mod scoring;
mod session;

pub use session::{FeedbackKind, GameSession, GameSettings, GuessFeedback, SessionStatus};
