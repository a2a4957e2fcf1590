use std::env;
use std::fmt;
use std::net::SocketAddr;

use url::Url;

use crate::error::ConfigError;

/// Default listen address when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Deployment environment the process runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
    Test,
}

impl AppEnv {
    fn parse(value: &str) -> Result<AppEnv, ConfigError> {
        match value {
            "development" => Ok(AppEnv::Development),
            "production" => Ok(AppEnv::Production),
            "test" => Ok(AppEnv::Test),
            other => Err(ConfigError::InvalidEnv(other.to_owned())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AppEnv::Development => "development",
            AppEnv::Production => "production",
            AppEnv::Test => "test",
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable process configuration.
///
/// Read and validated exactly once at startup, before any request-handling
/// component exists; an invalid value aborts the process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `APP_ENV`; defaults to development.
    pub env: AppEnv,
    /// `BASE_URL`; where clients reach the service. Optional, but must be a
    /// well-formed URL when set.
    pub base_url: Option<Url>,
    /// `BIND_ADDR`; the server listen address. Must parse as a socket
    /// address when set.
    pub bind_addr: String,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<AppConfig, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Core of [`AppConfig::from_env`] behind a lookup seam, so tests never
    /// mutate process-wide environment state.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<AppConfig, ConfigError> {
        let env = match lookup("APP_ENV") {
            // An empty value counts as unset.
            Some(value) if value.is_empty() => AppEnv::Development,
            Some(value) => AppEnv::parse(&value)?,
            None => AppEnv::Development,
        };

        let base_url = match lookup("BASE_URL") {
            Some(value) if value.is_empty() => None,
            Some(value) => {
                Some(Url::parse(&value).map_err(|_| ConfigError::InvalidBaseUrl(value))?)
            }
            None => None,
        };

        let bind_addr = match lookup("BIND_ADDR") {
            Some(value) if value.is_empty() => DEFAULT_BIND_ADDR.to_owned(),
            Some(value) => {
                value
                    .parse::<SocketAddr>()
                    .map_err(|_| ConfigError::InvalidBindAddr(value.clone()))?;
                value
            }
            None => DEFAULT_BIND_ADDR.to_owned(),
        };

        Ok(AppConfig {
            env,
            base_url,
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.env, AppEnv::Development);
        assert!(config.base_url.is_none());
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn accepts_the_three_valid_environments() {
        for (value, expected) in [
            ("development", AppEnv::Development),
            ("production", AppEnv::Production),
            ("test", AppEnv::Test),
        ] {
            let config = AppConfig::from_lookup(lookup_from(&[("APP_ENV", value)])).unwrap();
            assert_eq!(config.env, expected);
        }
    }

    #[test]
    fn invalid_environment_is_fatal() {
        let err = AppConfig::from_lookup(lookup_from(&[("APP_ENV", "staging")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid APP_ENV: staging");
    }

    #[test]
    fn empty_environment_falls_back_to_development() {
        let config = AppConfig::from_lookup(lookup_from(&[("APP_ENV", "")])).unwrap();
        assert_eq!(config.env, AppEnv::Development);
    }

    #[test]
    fn base_url_is_parsed_when_set() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("BASE_URL", "https://example.com")])).unwrap();
        let url = config.base_url.unwrap();

        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn invalid_base_url_is_fatal() {
        let err =
            AppConfig::from_lookup(lookup_from(&[("BASE_URL", "not-a-valid-url")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid BASE_URL: not-a-valid-url");
    }

    #[test]
    fn empty_base_url_counts_as_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[("BASE_URL", "")])).unwrap();
        assert!(config.base_url.is_none());
    }

    #[test]
    fn bind_addr_can_be_overridden() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("BIND_ADDR", "0.0.0.0:8080")])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn unparseable_bind_addr_is_fatal() {
        let err =
            AppConfig::from_lookup(lookup_from(&[("BIND_ADDR", "not-an-addr")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid BIND_ADDR: not-an-addr");
    }

    #[test]
    fn empty_bind_addr_falls_back_to_default() {
        let config = AppConfig::from_lookup(lookup_from(&[("BIND_ADDR", "")])).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }
}
