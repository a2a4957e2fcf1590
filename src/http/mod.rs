//! HTTP surface of the service.
//!
//! # Data Flow
//! ```text
//! GET /api/name
//!     → name.rs (generate, log outcome with ip + duration)
//!     → 200 {name} / 500 {error}
//!
//! POST /api/log
//!     → log.rs (parse record, attach ip, relay to server logger)
//!     → 200 {success:true} / 400 {success:false}
//! ```
//!
//! # Design Decisions
//! - Handlers are the error boundary: nothing HTTP-triggered escapes uncaught
//! - Caller attribution comes from forwarding headers, never from the socket
//! - Responses never leak generator or parser internals

pub mod log;
pub mod name;

use std::sync::Arc;

use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::generator::NameGenerator;
use crate::logging::Logger;

/// Route serving generated names.
pub const NAME_PATH: &str = "/api/name";
/// Route receiving client-side log records.
pub const LOG_PATH: &str = "/api/log";

/// Application state injected into handlers.
///
/// Cloned per request; both members are cheap to clone and read-only after
/// startup.
#[derive(Clone)]
pub struct AppState {
    pub logger: Arc<dyn Logger>,
    pub generator: NameGenerator,
}

impl AppState {
    pub fn new(logger: Arc<dyn Logger>, generator: NameGenerator) -> Self {
        Self { logger, generator }
    }
}

/// Build the service router with all handlers and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(NAME_PATH, get(name::handle))
        .route(LOG_PATH, post(log::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Caller IP for log attribution: `x-forwarded-for`, then `x-real-ip`, then
/// the literal `unknown`. Values are taken raw; empty or non-UTF-8 header
/// values count as absent.
pub(crate) fn client_ip(headers: &HeaderMap) -> String {
    header_str(headers, "x-forwarded-for")
        .or_else(|| header_str(headers, "x-real-ip"))
        .unwrap_or("unknown")
        .to_string()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
}
