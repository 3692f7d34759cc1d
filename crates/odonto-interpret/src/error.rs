use std::time::Duration;

use thiserror::Error;

use crate::messages;

/// Failure talking to an interpretation provider.
///
/// Never surfaces past the interpreter: each variant is downgraded to an
/// `unknown` command carrying [`ProviderError::user_message`].
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("interpretation service rate limited the request")]
    RateLimited,

    #[error("interpretation service quota exhausted")]
    QuotaExhausted,

    #[error("interpretation service returned {status}: {body}")]
    Service { status: u16, body: String },

    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("response did not conform to the command schema: {0}")]
    MalformedResponse(String),

    #[error("model timed out: {0}")]
    ModelTimeout(String),

    #[error("interpretation timed out after {0:?}")]
    Timeout(Duration),
}

impl ProviderError {
    /// Localized (es) explanation shown to the clinician.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::RateLimited => messages::RATE_LIMITED,
            Self::QuotaExhausted => messages::QUOTA_EXHAUSTED,
            Self::Service { .. } | Self::Invocation(_) => messages::SERVICE_UNAVAILABLE,
            Self::Transport(_) => messages::NETWORK_FAILURE,
            Self::MalformedResponse(_) => messages::MALFORMED_RESPONSE,
            Self::ModelTimeout(_) | Self::Timeout(_) => messages::TIMED_OUT,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Transport(format!("request timed out: {e}"))
        } else {
            ProviderError::Transport(e.to_string())
        }
    }
}
