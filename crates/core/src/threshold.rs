//! Threshold resolution from a key/value configuration source.

use std::collections::HashMap;

use crate::error::CoreError;

/// Name of the variable holding the threshold unless overridden.
pub const DEFAULT_THRESHOLD_KEY: &str = "X";

/// A string-keyed configuration lookup.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads the process environment.
///
/// A `.env` file, if present, is merged into the environment once at
/// startup by the binary; this type only looks values up.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfig;

impl ConfigSource for EnvConfig {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed in-memory configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    values: HashMap<String, String>,
}

impl StaticConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigSource for StaticConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Parse a base-10 signed threshold. The whole value must be digits with an
/// optional sign; whitespace is rejected.
pub fn parse_threshold(key: &str, raw: &str) -> Result<i64, CoreError> {
    raw.parse::<i64>()
        .map_err(|e| CoreError::InvalidThreshold {
            key: key.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

/// Look up `key` in `source` and parse it as a threshold.
pub fn resolve_threshold<C>(source: &C, key: &str) -> Result<i64, CoreError>
where
    C: ConfigSource + ?Sized,
{
    let raw = source.get(key).ok_or_else(|| CoreError::MissingThreshold {
        key: key.to_string(),
    })?;
    parse_threshold(key, &raw)
}
