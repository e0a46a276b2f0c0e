//! Prometheus metrics endpoint and HTTP metrics middleware
//!
//! `GET /metrics` renders the global `metrics-exporter-prometheus`
//! recorder in Prometheus text format. The middleware records
//! `http_requests_total` (counter) and `http_request_duration_seconds`
//! (histogram) for every request passing through the router.

use std::time::Instant;

use axum::{
    body::Body,
    extract::{MatchedPath, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics_exporter_prometheus::PrometheusHandle;

/// Shared state for the metrics endpoint
#[derive(Clone)]
pub struct MetricsState {
    pub handle: PrometheusHandle,
}

/// `GET /metrics`, the Prometheus scrape endpoint (no auth)
pub async fn prometheus_metrics(State(state): State<MetricsState>) -> impl IntoResponse {
    let body = state.handle.render();
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
}

/// Middleware that records per-request metrics:
///
/// - **`http_requests_total`** counter with labels `method`, `path`, `status`
/// - **`http_request_duration_seconds`** histogram with labels `method`, `path`
///
/// The path label uses the matched route pattern (`/api/v1/workdays/{id}`),
/// not the raw URI, to keep the cardinality bounded.
pub async fn http_metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed().as_secs_f64();

    let status = response.status().as_u16().to_string();

    metrics::counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status)
        .increment(1);
    metrics::histogram!("http_request_duration_seconds", "method" => method, "path" => path)
        .record(duration);

    response
}
