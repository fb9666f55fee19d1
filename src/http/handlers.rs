//! Request handlers for the public lookup endpoints.

use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::http::server::AppState;
use crate::observability::metrics;

/// Liveness probe.
pub async fn health() -> &'static str {
    "app is ok!"
}

/// List every loaded registration in source order.
pub async fn list_ouis(State(state): State<AppState>) -> Response {
    let start = Instant::now();
    let response = Json(state.registry.list_all().to_vec()).into_response();
    metrics::record_request("list", StatusCode::OK, start);
    response
}

/// Fetch a single registration by prefix.
pub async fn get_oui(State(state): State<AppState>, Path(oui): Path<String>) -> Response {
    let start = Instant::now();

    match state.registry.get(&oui) {
        Some(entry) => {
            let response = Json(entry.clone()).into_response();
            metrics::record_request("get", StatusCode::OK, start);
            response
        }
        None => {
            tracing::debug!(prefix = %oui, "OUI not found");
            metrics::record_request("get", StatusCode::NOT_FOUND, start);
            (StatusCode::NOT_FOUND, "OUI not found").into_response()
        }
    }
}

/// Resolve a full hardware address to its vendor name.
///
/// Malformed addresses are a normal no-match, reported as 404.
pub async fn resolve_mac(State(state): State<AppState>, Path(address): Path<String>) -> Response {
    let start = Instant::now();

    match state.registry.resolve(&address) {
        Some(vendor) => {
            let response = vendor.to_string().into_response();
            metrics::record_request("resolve", StatusCode::OK, start);
            response
        }
        None => {
            tracing::debug!(address = %address, "No vendor for address");
            metrics::record_request("resolve", StatusCode::NOT_FOUND, start);
            (StatusCode::NOT_FOUND, "vendor not found").into_response()
        }
    }
}
