//! Hint word selection from the reference caption.

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::normalize::{HINT_MIN_LENGTH, normalize};

/// Maximum number of hints a player can reveal in one round.
pub const MAX_HINTS: usize = 3;

/// Shortest word offered as a hint.
const MIN_HINT_CHARS: usize = 4;

/// Build the shuffled hint list for a caption.
///
/// Words are normalized with [`HINT_MIN_LENGTH`], deduplicated on first
/// occurrence and shuffled once with `rng`. Callers keep the returned order
/// for the whole round and reveal words from the front.
pub fn hint_candidates<R: Rng + ?Sized>(explanation: &str, rng: &mut R) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut candidates: Vec<String> = normalize(explanation, HINT_MIN_LENGTH)
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        // Already implied by HINT_MIN_LENGTH; kept so the hint rule holds if that constant moves.
        .filter(|word| word.len() >= MIN_HINT_CHARS)
        .collect();

    candidates.shuffle(rng);
    candidates
}
