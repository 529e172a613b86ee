use axum::{Json, Router, extract::State, routing::{get, post}};
use sgz_game::{ScoreResult, score};

use super::{
    model::{GameView, ScoreRequest, SubmitRequest},
    service,
};
use crate::{ApiState, error::ApiError, metrics};

/// Create the game routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/game", get(get_game))
        .route("/game/start", post(start_game))
        .route("/game/hint", post(request_hint))
        .route("/game/submit", post(submit_description))
        .route("/game/reset", post(play_again))
        .route("/score", post(score_description))
}

async fn get_game(State(state): State<ApiState>) -> Result<Json<GameView>, ApiError> {
    Ok(Json(state.lock_game()?.view()))
}

/// Start a round, also used to retry after a failed load
async fn start_game(State(state): State<ApiState>) -> Result<Json<GameView>, ApiError> {
    service::start_round(&state).await.map(Json)
}

async fn request_hint(State(state): State<ApiState>) -> Result<Json<GameView>, ApiError> {
    let mut game = state.lock_game()?;
    if game.request_hint() {
        metrics::record_hint();
    }
    Ok(Json(game.view()))
}

async fn submit_description(
    State(state): State<ApiState>,
    Json(payload): Json<SubmitRequest>,
) -> Result<Json<GameView>, ApiError> {
    let mut game = state.lock_game()?;
    if game.submit(&payload.description)? {
        if let GameView::Submitted(view) = game.view() {
            tracing::info!(
                score = view.score,
                total_user_words = view.total_user_words,
                hints_used = view.hints_used,
                "Description scored"
            );
            metrics::record_submission(view.score, view.hints_used);
        }
    }
    Ok(Json(game.view()))
}

/// Play again: discard the finished round
async fn play_again(State(state): State<ApiState>) -> Result<Json<GameView>, ApiError> {
    let mut game = state.lock_game()?;
    game.play_again();
    Ok(Json(game.view()))
}

/// Score arbitrary text against a caption without touching the game
async fn score_description(Json(payload): Json<ScoreRequest>) -> Json<ScoreResult> {
    Json(score(&payload.description, &payload.reference))
}
