use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BUCKET: &str = "odonto";
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-haiku-4-5-20251001-v1:0";
pub const DEFAULT_INTERPRET_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ODONTO_INTERPRET_TIMEOUT_SECS must be a positive integer, got {0:?}")]
    InvalidTimeout(String),
}

/// Server settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bucket holding `charts/{patient_id}.json`.
    pub bucket: String,
    /// Bedrock model or inference profile used for interpretation.
    pub model_id: String,
    pub interpret_timeout: Duration,
    /// When set, every route except `/health` requires this key.
    pub api_key: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let interpret_timeout = match get("ODONTO_INTERPRET_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_INTERPRET_TIMEOUT,
        };

        Ok(Self {
            bucket: get("ODONTO_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            model_id: get("ODONTO_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            interpret_timeout,
            api_key: get("ODONTO_API_KEY"),
        })
    }
}
