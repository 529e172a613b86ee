use std::time::Duration;

use serde::Deserialize;

/// Deployment environment, read from `APP_ENV`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Server configuration, loaded from environment variables.
///
/// Every field has a default so the server starts with an empty environment,
/// using the public `DEMO_KEY` for the APOD service.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default, rename = "app_env")]
    pub env: Environment,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_apod_base_url")]
    pub apod_base_url: String,
    #[serde(default = "default_apod_api_key")]
    pub apod_api_key: String,
    #[serde(default = "default_apod_timeout_secs")]
    pub apod_timeout_secs: u64,
    /// Upper bound on random dates tried before a round start gives up.
    #[serde(default = "default_apod_max_attempts")]
    pub apod_max_attempts: u32,
    /// Comma separated list of origins allowed by CORS.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
    /// Fixed seed for date sampling and hint order. Random when unset.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_port() -> u16 {
    3000
}

fn default_apod_base_url() -> String {
    sgz_apod::client::DEFAULT_BASE_URL.to_string()
}

fn default_apod_api_key() -> String {
    "DEMO_KEY".to_string()
}

fn default_apod_timeout_secs() -> u64 {
    sgz_apod::client::DEFAULT_TIMEOUT.as_secs()
}

fn default_apod_max_attempts() -> u32 {
    sgz_apod::DEFAULT_MAX_ATTEMPTS
}

fn default_allowed_origins() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            env: Environment::default(),
            port: default_port(),
            apod_base_url: default_apod_base_url(),
            apod_api_key: default_apod_api_key(),
            apod_timeout_secs: default_apod_timeout_secs(),
            apod_max_attempts: default_apod_max_attempts(),
            allowed_origins: default_allowed_origins(),
            rng_seed: None,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Self>()
    }

    pub fn apod_timeout(&self) -> Duration {
        Duration::from_secs(self.apod_timeout_secs)
    }

    pub fn parsed_allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }
}
