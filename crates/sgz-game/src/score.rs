//! Vocabulary overlap scoring.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::normalize::{SCORE_MIN_LENGTH, normalize};

/// Outcome of comparing a description against a reference caption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Number of distinct user words found in the reference.
    pub score: usize,
    /// The distinct matching words, in the order the user first wrote them.
    pub matched_words: Vec<String>,
    /// Every qualifying user word, duplicates included.
    pub total_user_words: usize,
}

/// Score `user_text` against `reference_text`.
///
/// Both sides are normalized with [`SCORE_MIN_LENGTH`]. A user word counts
/// once no matter how often it is repeated, while `total_user_words` counts
/// every qualifying occurrence.
///
/// # Examples
/// ```
/// use sgz_game::score::score;
///
/// let result = score("bright comet, bright tail", "A bright comet over the bay");
/// assert_eq!(result.score, 2);
/// assert_eq!(result.matched_words, vec!["bright", "comet"]);
/// assert_eq!(result.total_user_words, 4);
/// ```
pub fn score(user_text: &str, reference_text: &str) -> ScoreResult {
    let user_words = normalize(user_text, SCORE_MIN_LENGTH);
    let reference_words: HashSet<String> = normalize(reference_text, SCORE_MIN_LENGTH)
        .into_iter()
        .collect();

    let mut seen = HashSet::new();
    let mut matched_words = Vec::new();
    for word in &user_words {
        if reference_words.contains(word) && seen.insert(word) {
            matched_words.push(word.clone());
        }
    }

    ScoreResult {
        score: matched_words.len(),
        matched_words,
        total_user_words: user_words.len(),
    }
}
