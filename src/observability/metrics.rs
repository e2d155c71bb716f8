//! Metrics collection and exposition.
//!
//! # Metrics
//! - `catalog_requests_total` (counter): requests by method, path, status
//! - `catalog_request_duration_seconds` (histogram): latency by method, path
//!
//! # Design Decisions
//! - Path labels are folded to route templates to bound cardinality
//! - Without an installed recorder every call is a no-op

use std::net::SocketAddr;
use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const REQUESTS_TOTAL: &str = "catalog_requests_total";
pub const REQUEST_DURATION: &str = "catalog_request_duration_seconds";

/// Install the Prometheus exporter and its scrape listener.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Fold a request path into a bounded label value.
pub fn path_label(path: &str) -> &'static str {
    match path {
        "/computers/" | "/computers" => "/computers/",
        "/computers/sorted/" | "/computers/sorted" => "/computers/sorted/",
        _ => "other",
    }
}

/// Record a completed request.
pub fn record_request(method: &str, path: &'static str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!(REQUESTS_TOTAL, &labels).increment(1);
    metrics::histogram!(REQUEST_DURATION, "method" => method.to_string(), "path" => path)
        .record(start.elapsed().as_secs_f64());
}

/// Middleware recording every response that passes through the router.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = path_label(request.uri().path());

    let response = next.run(request).await;

    record_request(&method, path, response.status().as_u16(), start);
    response
}
