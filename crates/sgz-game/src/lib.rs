//! Core logic for the Stargazer caption guessing game.
//!
//! This crate holds everything that does not touch the network: turning text
//! into comparable words, scoring a description against a caption, choosing
//! hint words and the state machine a single game moves through.

pub mod hints;
pub mod normalize;
pub mod score;
pub mod session;

pub use hints::MAX_HINTS;
pub use normalize::normalize;
pub use score::{ScoreResult, score};
pub use session::{CompletedRound, ReferenceRecord, Round, SessionState};
