//! The single-game state machine.
//!
//! A game moves `Idle -> Playing -> Submitted -> Idle`. Every transition takes
//! the current state by value and returns the next one; a transition that is
//! not valid for the current state hands the state back unchanged.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::hints::{MAX_HINTS, hint_candidates};
use crate::score::{ScoreResult, score};

/// A picture and caption the player is asked to describe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    pub title: String,
    /// The caption descriptions are scored against.
    pub explanation: String,
    pub image_url: String,
    pub high_res_url: Option<String>,
    /// Publication date, `YYYY-MM-DD`.
    pub date: String,
    pub media_type: String,
}

/// A round in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    record: ReferenceRecord,
    hint_candidates: Vec<String>,
    revealed_hints: Vec<String>,
}

impl Round {
    /// Start a round, shuffling the hint words once with `rng`.
    pub fn new<R: Rng + ?Sized>(record: ReferenceRecord, rng: &mut R) -> Self {
        let hint_candidates = hint_candidates(&record.explanation, rng);
        Self {
            record,
            hint_candidates,
            revealed_hints: Vec::new(),
        }
    }

    pub fn record(&self) -> &ReferenceRecord {
        &self.record
    }

    pub fn revealed_hints(&self) -> &[String] {
        &self.revealed_hints
    }

    pub fn hints_used(&self) -> usize {
        self.revealed_hints.len()
    }

    /// Hints still available, bounded by both [`MAX_HINTS`] and the number of
    /// candidate words in the caption.
    pub fn hints_remaining(&self) -> usize {
        MAX_HINTS.min(self.hint_candidates.len()) - self.hints_used()
    }

    pub fn can_request_hint(&self) -> bool {
        self.hints_remaining() > 0
    }

    fn reveal_next_hint(&mut self) {
        if self.can_request_hint() {
            let next = self.hint_candidates[self.hints_used()].clone();
            self.revealed_hints.push(next);
        }
    }
}

/// A scored round, frozen until the player starts over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedRound {
    record: ReferenceRecord,
    result: ScoreResult,
    revealed_hints: Vec<String>,
}

impl CompletedRound {
    pub fn record(&self) -> &ReferenceRecord {
        &self.record
    }

    pub fn result(&self) -> &ScoreResult {
        &self.result
    }

    pub fn revealed_hints(&self) -> &[String] {
        &self.revealed_hints
    }

    pub fn hints_used(&self) -> usize {
        self.revealed_hints.len()
    }
}

/// Where the single active game currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Playing(Round),
    Submitted(CompletedRound),
}

impl SessionState {
    /// Begin a round with a freshly fetched record. Only valid from `Idle`.
    pub fn start<R: Rng + ?Sized>(self, record: ReferenceRecord, rng: &mut R) -> Self {
        match self {
            Self::Idle => Self::Playing(Round::new(record, rng)),
            other => other,
        }
    }

    /// Reveal the next hint word if the round still has one to give.
    pub fn request_hint(self) -> Self {
        match self {
            Self::Playing(mut round) => {
                round.reveal_next_hint();
                Self::Playing(round)
            }
            other => other,
        }
    }

    /// Score `description` against the caption.
    ///
    /// Blank descriptions are not accepted and leave the round running.
    pub fn submit(self, description: &str) -> Self {
        match self {
            Self::Playing(round) if !description.trim().is_empty() => {
                let result = score(description, &round.record.explanation);
                Self::Submitted(CompletedRound {
                    record: round.record,
                    result,
                    revealed_hints: round.revealed_hints,
                })
            }
            other => other,
        }
    }

    /// Throw the finished round away. Only valid from `Submitted`.
    pub fn play_again(self) -> Self {
        match self {
            Self::Submitted(_) => Self::Idle,
            other => other,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing(_))
    }

    pub fn can_request_hint(&self) -> bool {
        match self {
            Self::Playing(round) => round.can_request_hint(),
            _ => false,
        }
    }

    pub fn can_submit(&self, description: &str) -> bool {
        self.is_playing() && !description.trim().is_empty()
    }
}
