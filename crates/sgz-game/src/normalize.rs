//! Caption and description normalization.
//!
//! Both the user's description and the reference caption go through the same
//! pipeline before they are compared: lowercase, strip everything that is not
//! an ASCII letter, digit or whitespace, split on whitespace, then drop short
//! tokens and common English function words.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Tokens must be strictly longer than this to count when scoring.
pub const SCORE_MIN_LENGTH: usize = 2;

/// Tokens must be strictly longer than this to be offered as hints.
pub const HINT_MIN_LENGTH: usize = 3;

/// English function words ignored by both scoring and hint extraction.
///
/// Contractions are listed without their apostrophe because normalization
/// strips it before the lookup happens (`"don't"` becomes `"dont"`).
pub const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "youre", "youve", "youll",
    "youd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she",
    "shes", "her", "hers", "herself", "it", "its", "itself", "they", "them", "their", "theirs",
    "themselves", "what", "which", "who", "whom", "this", "that", "thatll", "these", "those",
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "up", "down", "in", "out", "on",
    "off", "over", "under", "again", "further", "then", "once", "here", "there", "when", "where",
    "why", "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "dont", "should", "shouldve", "now", "d", "ll", "m", "o", "re", "ve",
    "y", "ain", "aren", "arent", "couldn", "couldnt", "didn", "didnt", "doesn", "doesnt", "hadn",
    "hadnt", "hasn", "hasnt", "haven", "havent", "isn", "isnt", "ma", "mightn", "mightnt",
    "mustn", "mustnt", "needn", "neednt", "shan", "shant", "shouldn", "shouldnt", "wasn",
    "wasnt", "weren", "werent", "won", "wont", "wouldn", "wouldnt",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

// Applied after lowercasing, so uppercase letters never reach it.
static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("character filter regex is valid"));

/// Returns `true` if `word` is one of the built-in [`STOPWORDS`].
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

/// Split `text` into qualifying tokens.
///
/// Punctuation is removed rather than replaced, so `"sun-also-rises"` becomes
/// the single token `"sunalsorises"`. Tokens of `min_length` characters or
/// fewer are dropped, as are stopwords. Duplicates and original order are kept.
pub fn normalize(text: &str, min_length: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = DISALLOWED_CHARS.replace_all(&lowered, "");

    cleaned
        .split_whitespace()
        .filter(|token| token.len() > min_length)
        .filter(|token| !is_stopword(token))
        .map(str::to_owned)
        .collect()
}
