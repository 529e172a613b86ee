//! Prometheus metrics for request traffic and gameplay.

use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use sgz_apod::ApodError;
use std::time::Instant;

/// Initialize Prometheus metrics exporter
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0],
        )?
        .set_buckets_for_metric(
            Matcher::Full("apod_fetch_attempts".to_string()),
            &[1.0, 2.0, 3.0, 4.0, 5.0, 10.0],
        )?
        .set_buckets_for_metric(
            Matcher::Full("game_score".to_string()),
            &[0.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0],
        )?
        .install_recorder()?;

    Ok(handle)
}

/// Middleware to record HTTP request metrics
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    // Route templates keep label cardinality bounded
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(req).await;

    let status = response.status().as_u16().to_string();
    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.clone()
    )
    .increment(1);
    histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());

    response
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler(
    axum::extract::State(handle): axum::extract::State<PrometheusHandle>,
) -> impl IntoResponse {
    (StatusCode::OK, handle.render())
}

/// Record a round that found its picture after `attempts` draws
pub fn record_round_started(attempts: u32) {
    counter!("apod_fetches_total", "status" => "success").increment(1);
    histogram!("apod_fetch_attempts").record(f64::from(attempts));
}

/// Record a round start that failed to load a picture
pub fn record_fetch_failure(error: &ApodError) {
    counter!("apod_fetches_total", "status" => fetch_failure_label(error)).increment(1);
}

pub fn record_hint() {
    counter!("game_hints_total").increment(1);
}

pub fn record_submission(score: usize, hints_used: usize) {
    counter!("game_submissions_total", "hints_used" => hints_used.to_string()).increment(1);
    histogram!("game_score").record(score as f64);
}

fn fetch_failure_label(error: &ApodError) -> &'static str {
    match error {
        ApodError::Transport(e) if e.is_timeout() => "timeout",
        ApodError::Transport(_) => "transport",
        ApodError::Status(_) => "status",
        ApodError::NoImage { .. } => "no_image",
    }
}
