//! Shared utilities for integration tests.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use namegen::http::{router, AppState};
use namegen::logging::{Context, Level, Logger};
use namegen::NameGenerator;
use tokio::net::TcpListener;

/// One record observed by a [`CaptureLogger`].
#[derive(Debug, Clone)]
pub struct CapturedRecord {
    pub level: Level,
    pub message: String,
    pub error: Option<String>,
    pub context: Context,
}

/// Logger that keeps records in memory so tests can assert on them.
#[derive(Debug, Clone, Default)]
pub struct CaptureLogger {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl CaptureLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl Logger for CaptureLogger {
    fn log(
        &self,
        level: Level,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
        context: Context,
    ) {
        self.records.lock().unwrap().push(CapturedRecord {
            level,
            message: message.to_string(),
            error: error.map(|err| err.to_string()),
            context,
        });
    }
}

/// Start the service on an ephemeral port and return its base address.
pub async fn spawn_app(logger: Arc<dyn Logger>, generator: NameGenerator) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(AppState::new(logger, generator));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Poll until `capture` holds at least `count` records or give up after a
/// second. Returns whatever was captured either way.
#[allow(dead_code)]
pub async fn wait_for_records(capture: &CaptureLogger, count: usize) -> Vec<CapturedRecord> {
    for _ in 0..50 {
        let records = capture.records();
        if records.len() >= count {
            return records;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    capture.records()
}
