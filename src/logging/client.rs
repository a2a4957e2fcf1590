use std::error::Error as StdError;
use std::fmt;
use std::io::{self, Write};

use serde_json::{Map, Value};
use tokio::runtime::Handle;
use url::Url;

use crate::error::ConfigError;
use crate::http::LOG_PATH;

use super::{Context, ErrorDetails, Level, Logger};

/// Console tag for client-originated lines.
const TAG: &str = "[UI]";

/// Logging facade for processes on the far side of the HTTP boundary.
///
/// Mirrors every record to the local console, then forwards it to the
/// service's log ingest endpoint from a spawned background task. Delivery is
/// fire-and-forget: a network error or non-2xx response is reported on the
/// local console only and never reaches the caller. No retry, no queueing,
/// no batching.
#[derive(Debug, Clone)]
pub struct RemoteLogger {
    endpoint: Url,
    http: reqwest::Client,
    runtime: Handle,
}

impl RemoteLogger {
    /// Creates a logger forwarding to the ingest route under `base_url`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime: the background sends need
    /// a runtime handle to spawn on.
    pub fn new(base_url: &Url) -> Result<Self, ConfigError> {
        let endpoint = base_url
            .join(LOG_PATH)
            .map_err(|_| ConfigError::InvalidBaseUrl(base_url.to_string()))?;
        Ok(Self {
            endpoint,
            http: reqwest::Client::new(),
            runtime: Handle::current(),
        })
    }
}

impl Logger for RemoteLogger {
    fn log(
        &self,
        level: Level,
        message: &str,
        error: Option<&(dyn StdError + 'static)>,
        mut context: Context,
    ) {
        augment_with_error(&mut context, error);

        // Per-call ordering: the console line lands before the send is even
        // dispatched. Across calls, delivery order is unspecified.
        let line = console_line(message, &context);
        let _ = match level {
            Level::Error => writeln!(io::stderr().lock(), "{line}"),
            _ => writeln!(io::stdout().lock(), "{line}"),
        };

        let request = self
            .http
            .post(self.endpoint.clone())
            .json(&request_body(level, message, &context));
        self.runtime.spawn(async move {
            match request.send().await {
                Ok(response) if response.status().is_success() => {}
                Ok(response) => {
                    report_send_failure(format_args!("status {}", response.status()));
                }
                Err(err) => report_send_failure(format_args!("{err}")),
            }
        });
    }
}

/// Folds an error value into the context under `error`, replacing whatever
/// the caller put there.
fn augment_with_error(context: &mut Context, error: Option<&(dyn StdError + 'static)>) {
    if let Some(error) = error {
        context.insert("error".to_owned(), ErrorDetails::from_error(error).as_value());
    }
}

/// The POST body: `level` and `message` first, context flattened on top, so
/// a colliding context key wins.
fn request_body(level: Level, message: &str, context: &Context) -> Value {
    let mut body = Map::new();
    body.insert("level".to_owned(), Value::String(level.to_string()));
    body.insert("message".to_owned(), Value::String(message.to_owned()));
    for (key, value) in context {
        body.insert(key.clone(), value.clone());
    }
    Value::Object(body)
}

fn console_line(message: &str, context: &Context) -> String {
    if context.is_empty() {
        format!("{TAG} {message}")
    } else {
        format!("{TAG} {message} {}", Value::Object(context.clone()))
    }
}

fn report_send_failure(reason: fmt::Arguments<'_>) {
    let _ = writeln!(io::stderr().lock(), "{TAG} failed to forward log: {reason}");
}
