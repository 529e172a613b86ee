//! Owner of the one game the server runs.

use rand::Rng;
use sgz_game::{ReferenceRecord, SessionState};

use super::model::GameView;
use crate::error::ApiError;

/// Identifies the round start currently waiting on the APOD service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTicket(u64);

/// Result of asking to start a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStart {
    /// Go fetch a record and hand it back with this ticket.
    Fetch(RoundTicket),
    /// A round is already playing or scored; nothing to do.
    Active,
}

/// Holds the session state together with the at-most-one pending fetch.
///
/// Fetching happens outside the lock. A ticket is issued when a fetch starts
/// and only the holder of the current ticket may install the next round, so a
/// stale or abandoned fetch can never overwrite a newer outcome.
#[derive(Debug, Default)]
pub struct GameController {
    session: SessionState,
    pending: Option<RoundTicket>,
    issued: u64,
}

impl GameController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn view(&self) -> GameView {
        GameView::from_session(&self.session, self.is_loading())
    }

    pub fn begin_round(&mut self) -> Result<RoundStart, ApiError> {
        if self.pending.is_some() {
            return Err(ApiError::Conflict(
                "A picture is already being loaded".to_string(),
            ));
        }
        if !self.session.is_idle() {
            return Ok(RoundStart::Active);
        }

        self.issued += 1;
        let ticket = RoundTicket(self.issued);
        self.pending = Some(ticket);
        Ok(RoundStart::Fetch(ticket))
    }

    /// Install the fetched record. Returns `false` if `ticket` is stale.
    pub fn complete_round<R: Rng + ?Sized>(
        &mut self,
        ticket: RoundTicket,
        record: ReferenceRecord,
        rng: &mut R,
    ) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.transition(|session| session.start(record, rng));
        true
    }

    /// Drop the pending marker after a failed or cancelled fetch.
    pub fn abandon_round(&mut self, ticket: RoundTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Returns `true` if a new hint was revealed.
    pub fn request_hint(&mut self) -> bool {
        let before = self.hints_used();
        self.transition(SessionState::request_hint);
        self.hints_used() > before
    }

    /// Returns `true` if the description was scored.
    ///
    /// Outside a running round this does nothing; inside one a blank
    /// description is rejected.
    pub fn submit(&mut self, description: &str) -> Result<bool, ApiError> {
        if !self.session.is_playing() {
            return Ok(false);
        }
        if !self.session.can_submit(description) {
            return Err(ApiError::Validation(
                "Description cannot be empty".to_string(),
            ));
        }

        self.transition(|session| session.submit(description));
        Ok(true)
    }

    /// Returns `true` if a finished round was cleared.
    pub fn play_again(&mut self) -> bool {
        let was_submitted = matches!(self.session, SessionState::Submitted(_));
        self.transition(SessionState::play_again);
        was_submitted
    }

    fn hints_used(&self) -> usize {
        match &self.session {
            SessionState::Playing(round) => round.hints_used(),
            SessionState::Submitted(done) => done.hints_used(),
            SessionState::Idle => 0,
        }
    }

    fn transition(&mut self, step: impl FnOnce(SessionState) -> SessionState) {
        let current = std::mem::take(&mut self.session);
        self.session = step(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use sgz_game::MAX_HINTS;

    fn record() -> ReferenceRecord {
        ReferenceRecord {
            title: "Saturn at Opposition".to_string(),
            explanation: "Saturn shines bright with rings tilted toward Earth tonight.".to_string(),
            image_url: "https://apod.example/saturn.jpg".to_string(),
            high_res_url: Some("https://apod.example/saturn_big.jpg".to_string()),
            date: "2022-08-14".to_string(),
            media_type: "image".to_string(),
        }
    }

    fn fetch_ticket(game: &mut GameController) -> RoundTicket {
        match game.begin_round().unwrap() {
            RoundStart::Fetch(ticket) => ticket,
            RoundStart::Active => panic!("expected a fetch ticket"),
        }
    }

    fn playing() -> GameController {
        let mut game = GameController::new();
        let ticket = fetch_ticket(&mut game);
        assert!(game.complete_round(ticket, record(), &mut StdRng::seed_from_u64(5)));
        game
    }

    #[test]
    fn test_second_start_while_loading_conflicts() {
        let mut game = GameController::new();
        let _ticket = fetch_ticket(&mut game);

        assert!(game.is_loading());
        assert!(matches!(game.begin_round(), Err(ApiError::Conflict(_))));
        assert_eq!(game.view(), GameView::Idle { loading: true });
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut game = GameController::new();
        let first = fetch_ticket(&mut game);
        assert!(game.abandon_round(first));

        let second = fetch_ticket(&mut game);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(!game.complete_round(first, record(), &mut rng));
        assert!(game.session().is_idle());

        assert!(game.complete_round(second, record(), &mut rng));
        assert!(game.session().is_playing());
        assert!(!game.is_loading());
    }

    #[test]
    fn test_abandon_allows_retry() {
        let mut game = GameController::new();
        let ticket = fetch_ticket(&mut game);
        assert!(game.abandon_round(ticket));
        assert!(!game.abandon_round(ticket));
        assert!(!game.is_loading());
        assert!(matches!(game.begin_round(), Ok(RoundStart::Fetch(_))));
    }

    #[test]
    fn test_start_while_playing_is_noop() {
        let mut game = playing();
        assert_eq!(game.begin_round().unwrap(), RoundStart::Active);
        assert!(!game.is_loading());
    }

    #[test]
    fn test_hint_reporting() {
        let mut game = playing();
        for _ in 0..MAX_HINTS {
            assert!(game.request_hint());
        }
        assert!(!game.request_hint());

        let GameView::Playing(view) = game.view() else {
            panic!("expected playing view");
        };
        assert_eq!(view.hints_used, MAX_HINTS);
        assert_eq!(view.hints_remaining, 0);
        assert!(!view.can_request_hint);
    }

    #[test]
    fn test_blank_submit_rejected_only_while_playing() {
        let mut idle = GameController::new();
        assert!(!idle.submit("  ").unwrap());

        let mut game = playing();
        assert!(matches!(game.submit(" \n"), Err(ApiError::Validation(_))));
        assert!(game.session().is_playing());
    }

    #[test]
    fn test_full_cycle() {
        let mut game = playing();
        assert!(game.submit("Bright rings on Saturn").unwrap());

        let GameView::Submitted(view) = game.view() else {
            panic!("expected submitted view");
        };
        assert_eq!(view.score, 3);
        assert!(!game.request_hint());

        assert!(game.play_again());
        assert_eq!(game.view(), GameView::Idle { loading: false });
        assert!(!game.play_again());
    }
}
