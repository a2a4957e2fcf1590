//! Name Generator Service
//!
//! A small web service that mints random adjective-animal names and collects
//! structured logs from the pages that display them.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │               NAME SERVICE                    │
//!                      │                                               │
//!    GET /api/name     │  ┌─────────┐    ┌───────────┐                │
//!    ─────────────────▶│  │  http   │───▶│ generator │                │
//!                      │  │ handlers│    │ (words)   │                │
//!    POST /api/log     │  └────┬────┘    └───────────┘                │
//!    ─────────────────▶│       │                                      │
//!                      │       ▼                                      │
//!                      │  ┌──────────────────────────────┐            │
//!                      │  │  logging (JSON lines on      │            │
//!                      │  │  stdout/stderr, one record   │            │
//!                      │  │  per request)                │            │
//!                      │  └──────────────────────────────┘            │
//!                      │                                               │
//!                      │  ┌─────────┐  cross-cutting: env validation, │
//!                      │  │ config  │  tracing, graceful shutdown     │
//!                      │  └─────────┘                                  │
//!                      └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod generator;
pub mod http;
pub mod logging;
pub mod words;

// Cross-cutting concerns
pub mod config;
pub mod error;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::generator::NameGenerator;
use crate::http::AppState;
use crate::logging::ServerLogger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "namegen=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("namegen v0.1.0 starting");

    // Validate the environment before anything else touches it
    let config = AppConfig::from_env()?;

    tracing::info!(
        env = %config.env,
        bind_addr = %config.bind_addr,
        base_url = ?config.base_url,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let state = AppState::new(Arc::new(ServerLogger::new()), NameGenerator::default());
    axum::serve(listener, http::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
