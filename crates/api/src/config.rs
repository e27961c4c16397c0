use std::str::FromStr;

use axum::http::HeaderValue;
use mta_core::threshold::{ConfigSource, EnvConfig, DEFAULT_THRESHOLD_KEY};

/// Invalid server setting found while loading [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
#[error("{var}={value:?} is invalid: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Server configuration loaded from environment variables.
///
/// The threshold itself is not part of this struct; handlers resolve it
/// per request under [`ServerConfig::threshold_key`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Variable holding the threshold (default: `X`).
    pub threshold_key: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
            request_timeout_secs: 30,
            threshold_key: DEFAULT_THRESHOLD_KEY.into(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `THRESHOLD_KEY`        | `X`                        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&EnvConfig)
    }

    /// Load configuration from any key/value source, falling back to
    /// [`ServerConfig::default`] for unset keys.
    pub fn from_source<C>(source: &C) -> Result<Self, ConfigError>
    where
        C: ConfigSource + ?Sized,
    {
        let defaults = Self::default();

        let host = source.get("HOST").unwrap_or(defaults.host);
        let port = parse_or(source, "PORT", defaults.port)?;
        let request_timeout_secs =
            parse_or(source, "REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;

        let cors_origins = match source.get("CORS_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => defaults.cors_origins,
        };

        let threshold_key = source
            .get("THRESHOLD_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .unwrap_or(defaults.threshold_key);

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            threshold_key,
        })
    }
}

fn parse_or<C, T>(source: &C, var: &'static str, default: T) -> Result<T, ConfigError>
where
    C: ConfigSource + ?Sized,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match source.get(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError {
            var,
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            if origin == "*" {
                // tower-http panics on `*` inside an explicit origin list.
                return Err(ConfigError {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                    reason: "wildcard origin is not supported, list origins explicitly".into(),
                });
            }
            HeaderValue::from_str(origin).map_err(|e| ConfigError {
                var: "CORS_ORIGINS",
                value: origin.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}
