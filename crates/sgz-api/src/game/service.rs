use std::sync::{Arc, Mutex};

use chrono::Utc;
use sgz_apod::fetch_image_record;

use super::{
    controller::{GameController, RoundStart, RoundTicket},
    model::GameView,
};
use crate::{error::ApiError, metrics, state::ApiState};

/// Clears the pending round if the request is dropped mid-fetch.
///
/// Axum drops a handler future when the client disconnects, which would
/// otherwise leave the game stuck in the loading state.
struct PendingRound {
    game: Arc<Mutex<GameController>>,
    ticket: RoundTicket,
    armed: bool,
}

impl PendingRound {
    fn new(game: Arc<Mutex<GameController>>, ticket: RoundTicket) -> Self {
        Self {
            game,
            ticket,
            armed: true,
        }
    }

    fn disarm(mut self) -> RoundTicket {
        self.armed = false;
        self.ticket
    }
}

impl Drop for PendingRound {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Ok(mut game) = self.game.lock()
            && game.abandon_round(self.ticket)
        {
            tracing::warn!("Round start cancelled before the picture arrived");
        }
    }
}

/// Start a round: fetch a random picture and move the game to playing.
///
/// Does nothing if a round is already playing or scored. Fails with a
/// conflict while another start is in flight, and with an upstream error if
/// no picture could be loaded, in which case the game stays idle.
pub async fn start_round(state: &ApiState) -> Result<GameView, ApiError> {
    let start = state.lock_game()?.begin_round();
    let ticket = match start? {
        RoundStart::Fetch(ticket) => ticket,
        RoundStart::Active => return Ok(state.lock_game()?.view()),
    };

    let pending = PendingRound::new(Arc::clone(&state.game), ticket);
    let mut rng = state.round_rng()?;
    let today = Utc::now().date_naive();

    let outcome =
        fetch_image_record(&state.apod, &mut rng, today, state.max_fetch_attempts).await;
    let ticket = pending.disarm();

    let mut game = state.lock_game()?;
    match outcome {
        Ok(fetched) => {
            metrics::record_round_started(fetched.attempts);
            if !game.complete_round(ticket, fetched.record, &mut rng) {
                tracing::warn!("Discarding picture for a round that is no longer pending");
            }
            Ok(game.view())
        }
        Err(e) => {
            game.abandon_round(ticket);
            metrics::record_fetch_failure(&e);
            Err(e.into())
        }
    }
}
