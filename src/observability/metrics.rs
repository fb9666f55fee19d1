//! Metrics collection and exposition.
//!
//! # Metrics
//! - `oui_requests_total` (counter): requests by route and status
//! - `oui_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Prometheus exporter on a dedicated listener, enabled via config

use std::net::SocketAddr;
use std::time::Instant;

use axum::http::StatusCode;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(err) => tracing::error!(error = %err, "Failed to install metrics exporter"),
    }
}

/// Record one served request.
pub fn record_request(route: &'static str, status: StatusCode, start: Instant) {
    let labels = [
        ("route", route.to_string()),
        ("status", status.as_u16().to_string()),
    ];
    metrics::counter!("oui_requests_total", &labels).increment(1);
    metrics::histogram!("oui_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}
