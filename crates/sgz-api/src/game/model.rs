use serde::{Deserialize, Serialize};
use sgz_game::SessionState;

/// Body of `POST /game/submit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub description: String,
}

/// Body of `POST /score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub description: String,
    pub reference: String,
}

/// What the player sees while a round is running.
///
/// The caption is withheld until the description is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayingView {
    pub title: String,
    pub image_url: String,
    pub high_res_url: Option<String>,
    pub date: String,
    pub hints_used: usize,
    pub hints_remaining: usize,
    pub revealed_hints: Vec<String>,
    pub can_request_hint: bool,
}

/// The revealed caption and the score of a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedView {
    pub title: String,
    pub explanation: String,
    pub image_url: String,
    pub high_res_url: Option<String>,
    pub date: String,
    pub score: usize,
    pub matched_words: Vec<String>,
    pub total_user_words: usize,
    pub hints_used: usize,
    pub revealed_hints: Vec<String>,
}

/// Client-facing snapshot of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameView {
    Idle { loading: bool },
    Playing(PlayingView),
    Submitted(SubmittedView),
}

impl GameView {
    pub fn from_session(session: &SessionState, loading: bool) -> Self {
        match session {
            SessionState::Idle => Self::Idle { loading },
            SessionState::Playing(round) => {
                let record = round.record();
                Self::Playing(PlayingView {
                    title: record.title.clone(),
                    image_url: record.image_url.clone(),
                    high_res_url: record.high_res_url.clone(),
                    date: record.date.clone(),
                    hints_used: round.hints_used(),
                    hints_remaining: round.hints_remaining(),
                    revealed_hints: round.revealed_hints().to_vec(),
                    can_request_hint: round.can_request_hint(),
                })
            }
            SessionState::Submitted(done) => {
                let record = done.record();
                let result = done.result();
                Self::Submitted(SubmittedView {
                    title: record.title.clone(),
                    explanation: record.explanation.clone(),
                    image_url: record.image_url.clone(),
                    high_res_url: record.high_res_url.clone(),
                    date: record.date.clone(),
                    score: result.score,
                    matched_words: result.matched_words.clone(),
                    total_user_words: result.total_user_words,
                    hints_used: done.hints_used(),
                    revealed_hints: done.revealed_hints().to_vec(),
                })
            }
        }
    }
}
