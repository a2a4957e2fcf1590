use std::error::Error as StdError;
use std::io::{self, Write};

use super::{format_record, Context, Level, Logger};

/// Process-wide console sink: one JSON line per record, written
/// synchronously.
///
/// Errors go to stderr, every other level to stdout. Write failures are
/// ignored; logging must never take the process down.
#[derive(Debug, Default, Clone, Copy)]
pub struct ServerLogger;

impl ServerLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for ServerLogger {
    fn log(
        &self,
        level: Level,
        message: &str,
        error: Option<&(dyn StdError + 'static)>,
        context: Context,
    ) {
        let line = format_record(level, message, error, &context);
        let _ = match level {
            Level::Error => writeln!(io::stderr().lock(), "{line}"),
            _ => writeln!(io::stdout().lock(), "{line}"),
        };
    }
}
