//! Log output for the game server.
//!
//! Development prints readable multi-line events; production writes one JSON
//! object per event. `RUST_LOG` replaces the built-in filter in both cases,
//! e.g. `RUST_LOG=info,sgz_apod=trace` to follow every APOD draw.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

/// Filter used in development when `RUST_LOG` is unset.
///
/// Game and APOD crates log every round step; HTTP client internals stay quiet.
const DEVELOPMENT_FILTER: &str =
    "info,sgz_api=debug,sgz_apod=debug,sgz_game=debug,tower_http=debug,reqwest=warn,hyper_util=warn";

/// Filter used in production when `RUST_LOG` is unset.
const PRODUCTION_FILTER: &str = "warn,sgz_api=info,sgz_apod=info,tower_http=info";

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber for `env`. Call once at startup.
pub fn init_tracing(env: &Environment) {
    let registry = tracing_subscriber::registry();

    if env.is_development() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(filter_or(DEVELOPMENT_FILTER)),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_filter(filter_or(PRODUCTION_FILTER)),
            )
            .init();
    }

    tracing::info!(environment = ?env, "Logging ready");
}
