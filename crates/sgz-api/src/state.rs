use std::sync::{Arc, Mutex, MutexGuard};

use rand::{RngCore, SeedableRng, rngs::StdRng};
use sgz_apod::ApodClient;

use crate::{
    ApiConfig, config::Environment, error::ApiError, game::GameController,
};

#[derive(Clone, Debug)]
pub struct ApiState {
    /// The single game this server hosts.
    pub game: Arc<Mutex<GameController>>,
    pub apod: ApodClient,
    /// Source of per-round randomness (date sampling and hint order).
    pub rng: Arc<Mutex<StdRng>>,
    pub max_fetch_attempts: u32,
    pub environment: Environment,
}

impl ApiState {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let apod = ApodClient::new(
            &config.apod_base_url,
            config.apod_api_key.clone(),
            config.apod_timeout(),
        )?;

        let rng = match config.rng_seed {
            Some(seed) => {
                tracing::info!(seed, "Using fixed RNG seed");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            game: Arc::new(Mutex::new(GameController::new())),
            apod,
            rng: Arc::new(Mutex::new(rng)),
            max_fetch_attempts: config.apod_max_attempts,
            environment: config.env,
        })
    }

    pub fn lock_game(&self) -> Result<MutexGuard<'_, GameController>, ApiError> {
        self.game
            .lock()
            .map_err(|_| ApiError::Internal("game state lock poisoned".to_string()))
    }

    /// Derive an independent generator for one round.
    pub fn round_rng(&self) -> Result<StdRng, ApiError> {
        let seed = self
            .rng
            .lock()
            .map_err(|_| ApiError::Internal("rng lock poisoned".to_string()))?
            .next_u64();
        Ok(StdRng::seed_from_u64(seed))
    }
}
