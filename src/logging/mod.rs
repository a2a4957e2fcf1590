//! Structured logging pipeline.
//!
//! One [`Logger`] contract, two implementations: [`ServerLogger`] writes JSON
//! lines to the process console, [`RemoteLogger`] mirrors records to the
//! local console and forwards them to the service's log ingest endpoint.
//! Records are open JSON objects: a level, a message, a timestamp, and
//! whatever context the call site attaches.

pub mod client;
pub mod server;

pub use client::RemoteLogger;
pub use server::ServerLogger;

use std::error::Error as StdError;
use std::fmt;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
    Debug,
}

impl Level {
    /// Parses a level name. Anything unrecognized falls back to `Info`.
    pub fn parse(name: &str) -> Level {
        match name {
            "warn" => Level::Warn,
            "error" => Level::Error,
            "debug" => Level::Debug,
            _ => Level::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Debug => "debug",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Open key→value mapping merged into a record at top level.
pub type Context = Map<String, Value>;

/// Builds a [`Context`] from a `json!` object literal.
///
/// Anything that is not a JSON object yields an empty context.
pub fn context(value: Value) -> Context {
    match value {
        Value::Object(map) => map,
        _ => Context::new(),
    }
}

/// Wire shape of an error value attached to an `error`-level record.
///
/// `name` stays the literal `"Error"` for schema compatibility with the
/// browser-style records the ingest endpoint receives; identity lives in
/// `message` and in the `stack` cause chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetails {
    pub name: String,
    pub message: String,
    pub stack: String,
}

impl ErrorDetails {
    /// Serializes an error with its source chain rendered into `stack`.
    pub fn from_error(error: &(dyn StdError + 'static)) -> Self {
        let mut stack = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            stack.push_str("\ncaused by: ");
            stack.push_str(&cause.to_string());
            source = cause.source();
        }
        Self {
            name: "Error".to_owned(),
            message: error.to_string(),
            stack,
        }
    }

    pub(crate) fn as_value(&self) -> Value {
        json!({
            "name": self.name,
            "message": self.message,
            "stack": self.stack,
        })
    }
}

/// Leveled logging contract shared by the console sink and the forwarding
/// client.
///
/// `log` is the single required operation; the leveled methods are the
/// call-site surface. Implementations must never panic and must never
/// surface a failure to the caller.
pub trait Logger: Send + Sync {
    fn log(
        &self,
        level: Level,
        message: &str,
        error: Option<&(dyn StdError + 'static)>,
        context: Context,
    );

    fn info(&self, message: &str, context: Context) {
        self.log(Level::Info, message, None, context);
    }

    fn warn(&self, message: &str, context: Context) {
        self.log(Level::Warn, message, None, context);
    }

    fn debug(&self, message: &str, context: Context) {
        self.log(Level::Debug, message, None, context);
    }

    fn error(&self, message: &str, error: Option<&(dyn StdError + 'static)>, context: Context) {
        self.log(Level::Error, message, error, context);
    }
}

/// Formats one record as a single JSON line.
///
/// Reserved fields (`level`, `message`, `timestamp`, and `error` when an
/// error value is attached) are set before the context merges in, so a
/// colliding context key wins. Building through [`Value`] keeps the whole
/// path infallible: formatting a record cannot panic or return an error.
pub fn format_record(
    level: Level,
    message: &str,
    error: Option<&(dyn StdError + 'static)>,
    context: &Context,
) -> String {
    let mut record = Map::new();
    record.insert("level".to_owned(), Value::String(level.to_string()));
    record.insert("message".to_owned(), Value::String(message.to_owned()));
    record.insert(
        "timestamp".to_owned(),
        Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    if let Some(error) = error {
        record.insert("error".to_owned(), ErrorDetails::from_error(error).as_value());
    }
    for (key, value) in context {
        record.insert(key.clone(), value.clone());
    }
    Value::Object(record).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use crate::error::{EmptyDictionary, GenerationError};

    use super::*;

    fn parse_line(line: &str) -> Value {
        serde_json::from_str(line).expect("log line is not valid JSON")
    }

    #[test]
    fn line_carries_level_message_and_timestamp() {
        let line = format_record(Level::Info, "Test message", None, &Context::new());
        let record = parse_line(&line);

        assert_eq!(record["level"], "info");
        assert_eq!(record["message"], "Test message");
        assert!(record.get("timestamp").is_some());
    }

    #[test]
    fn timestamp_is_rfc3339_and_not_in_the_future() {
        let line = format_record(Level::Info, "Test", None, &Context::new());
        let record = parse_line(&line);

        let timestamp =
            DateTime::parse_from_rfc3339(record["timestamp"].as_str().unwrap()).unwrap();
        assert!(timestamp.with_timezone(&Utc) <= Utc::now());
    }

    #[test]
    fn context_merges_at_top_level() {
        let ctx = context(json!({ "key": "value", "count": 3 }));
        let record = parse_line(&format_record(Level::Warn, "Warning message", None, &ctx));

        assert_eq!(record["level"], "warn");
        assert_eq!(record["key"], "value");
        assert_eq!(record["count"], 3);
    }

    #[test]
    fn colliding_context_key_wins() {
        let ctx = context(json!({ "level": "shadowed" }));
        let record = parse_line(&format_record(Level::Info, "Test", None, &ctx));

        assert_eq!(record["level"], "shadowed");
    }

    #[test]
    fn attached_error_maps_to_name_message_stack() {
        let err = GenerationError::from(EmptyDictionary);
        let line = format_record(Level::Error, "Error occurred", Some(&err), &Context::new());
        let record = parse_line(&line);

        assert_eq!(record["error"]["name"], "Error");
        assert_eq!(record["error"]["message"], "failed to generate name");
        let stack = record["error"]["stack"].as_str().unwrap();
        assert!(stack.contains("caused by: dictionary is empty"));
    }

    #[test]
    fn unrecognized_level_parses_to_info() {
        assert_eq!(Level::parse("fatal"), Level::Info);
        assert_eq!(Level::parse(""), Level::Info);
        assert_eq!(Level::parse("warn"), Level::Warn);
        assert_eq!(Level::parse("error"), Level::Error);
        assert_eq!(Level::parse("debug"), Level::Debug);
    }

    #[test]
    fn level_displays_lowercase() {
        assert_eq!(Level::Error.to_string(), "error");
        assert_eq!(serde_json::to_value(Level::Debug).unwrap(), json!("debug"));
    }

    #[test]
    fn non_object_context_is_empty() {
        assert!(context(json!("just a string")).is_empty());
        assert!(context(json!([1, 2, 3])).is_empty());
    }
}
