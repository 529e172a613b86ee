//! HTTP API for the Stargazer caption guessing game.
//!
//! The server hosts one game at a time. Clients start a round to receive a
//! random astronomy picture, may ask for up to three hint words, submit a
//! description and get back the caption along with how many of its words
//! they used.

pub mod config;
pub mod error;
pub mod game;
pub mod metrics;
pub mod middleware;
pub mod router;
pub mod state;
pub mod tracing;

pub use config::ApiConfig;
pub use state::ApiState;
