//! Name Generator Service Library

pub mod config;
pub mod error;
pub mod generator;
pub mod http;
pub mod logging;
pub mod words;

pub use config::AppConfig;
pub use generator::NameGenerator;
pub use logging::{Logger, RemoteLogger, ServerLogger};
