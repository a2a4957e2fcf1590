//! `GET /api/name`: serve a freshly generated name.
//!
//! # Responsibilities
//! - Generate one name per request and report it with caller attribution
//! - Log exactly one record per request, success or failure
//! - Keep responses uncacheable so every page load gets a fresh name

use std::time::Instant;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use super::{client_ip, AppState};
use crate::logging::context;

/// Body of the error response. Deliberately generic; the cause stays in the
/// server log.
pub const GENERATE_FAILED: &str = "Failed to generate name";

const CACHE_CONTROL_VALUE: &str = "no-store, no-cache, must-revalidate";
const NOSNIFF: &str = "nosniff";

#[derive(Debug, Serialize)]
struct NameResponse {
    name: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub async fn handle(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let start = Instant::now();
    let ip = client_ip(&headers);

    match state.generator.generate() {
        Ok(name) => {
            // 1. Log the outcome before the response leaves the handler.
            state.logger.info(
                "Name generated",
                context(json!({
                    "source": "api",
                    "event": "api_request",
                    "name": name.as_str(),
                    "ip": ip,
                    "duration": start.elapsed().as_millis() as u64,
                })),
            );

            // 2. Responses are never cacheable; every load gets a fresh name.
            (
                StatusCode::OK,
                [
                    (header::CACHE_CONTROL, CACHE_CONTROL_VALUE),
                    (header::X_CONTENT_TYPE_OPTIONS, NOSNIFF),
                ],
                Json(NameResponse { name }),
            )
                .into_response()
        }
        Err(err) => {
            state.logger.error(
                "Error generating name",
                Some(&err),
                context(json!({
                    "source": "api",
                    "event": "api_request",
                    "ip": ip,
                    "duration": start.elapsed().as_millis() as u64,
                })),
            );

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::X_CONTENT_TYPE_OPTIONS, NOSNIFF)],
                Json(ErrorResponse {
                    error: GENERATE_FAILED.to_string(),
                }),
            )
                .into_response()
        }
    }
}
