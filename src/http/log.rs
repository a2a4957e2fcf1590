//! `POST /api/log`: ingest log records relayed from browser sessions.
//!
//! # Responsibilities
//! - Validate the payload shape before touching the logger
//! - Stamp every accepted record with the caller's IP, overwriting any
//!   client-supplied value
//! - Dispatch exactly one logger call per accepted record

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{client_ip, AppState};
use crate::logging::{Context, Level};

/// Wire format of a relayed record. Anything beyond `level` and `message`
/// is carried as open context.
#[derive(Debug, Deserialize)]
struct ClientLogRecord {
    level: Option<String>,
    message: String,
    #[serde(flatten)]
    context: Context,
}

/// Ingest acknowledgement body.
#[derive(Debug, Serialize)]
pub struct LogAck {
    success: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<LogAck>) {
    // 1. Reject anything that is not a record before it reaches the logger.
    let mut record: ClientLogRecord = match serde_json::from_slice(&body) {
        Ok(record) => record,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, Json(LogAck { success: false }));
        }
    };

    // 2. The server-observed IP wins over whatever the client claimed.
    record
        .context
        .insert("ip".to_string(), Value::String(client_ip(&headers)));

    // 3. Unrecognized or missing levels degrade to info rather than rejecting.
    let level = record
        .level
        .as_deref()
        .map(Level::parse)
        .unwrap_or(Level::Info);

    dispatch(&state, level, &record.message, record.context);

    (StatusCode::OK, Json(LogAck { success: true }))
}

fn dispatch(state: &AppState, level: Level, message: &str, context: Context) {
    match level {
        // Relayed errors arrive pre-serialized inside the context, so no
        // structured error value is attached here.
        Level::Error => state.logger.error(message, None, context),
        Level::Warn => state.logger.warn(message, context),
        Level::Debug => state.logger.debug(message, context),
        Level::Info => state.logger.info(message, context),
    }
}
