use axum::{Router, middleware, routing::get};
use sgz_api::{config::ApiConfig, state::ApiState};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    sgz_api::tracing::init_tracing(&config.env);

    let metrics_handle = sgz_api::metrics::init_metrics()?;
    tracing::info!("Prometheus metrics exporter initialized");

    let state = ApiState::new(&config)?;
    tracing::info!(
        endpoint = state.apod.endpoint(),
        max_attempts = state.max_fetch_attempts,
        "APOD client ready"
    );

    let cors = sgz_api::middleware::cors::create_cors_layer(config.parsed_allowed_origins());

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let metrics_app = Router::new()
        .route("/metrics", get(sgz_api::metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = sgz_api::router::router()
        .route_layer(middleware::from_fn(sgz_api::metrics::track_metrics))
        .with_state(state)
        .merge(metrics_app)
        .layer(cors)
        .layer(trace_layer)
        .layer(middleware::from_fn(
            sgz_api::middleware::request_id::request_id_middleware,
        ));

    let app = sgz_api::middleware::security_headers::apply_security_headers(app, config.env);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(environment = ?config.env, "Server running on http://localhost:{}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
