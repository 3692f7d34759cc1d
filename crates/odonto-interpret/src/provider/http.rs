//! Client for a remote interpretation endpoint speaking the
//! `InterpretationRequest` / `StructuredCommand` JSON contract.

use async_trait::async_trait;
use odonto_core::models::command::{InterpretationRequest, StructuredCommand};
use reqwest::StatusCode;
use tracing::{debug, error};

use super::InterpretationProvider;
use crate::error::ProviderError;
use crate::prompt;

/// Posts requests to an interpretation endpoint.
///
/// Status mapping: 429 is rate limiting, 402 is quota exhaustion, any other
/// non-2xx is a generic service error. Nothing is retried.
pub struct HttpProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: None,
        }
    }

    /// Send the key both as a bearer token and as an `apikey` header.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Use a preconfigured client (proxies, connect timeouts, ...).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl InterpretationProvider for HttpProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn interpret(
        &self,
        request: &InterpretationRequest,
    ) -> Result<StructuredCommand, ProviderError> {
        let mut req = self.client.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key).header("apikey", key);
        }

        let response = req.send().await.map_err(|e| {
            error!(endpoint = %self.endpoint, error = %e, "interpretation request failed");
            ProviderError::from(e)
        })?;

        let status = response.status();
        debug!(status = %status, "received interpretation response");

        match status {
            StatusCode::TOO_MANY_REQUESTS => return Err(ProviderError::RateLimited),
            StatusCode::PAYMENT_REQUIRED => return Err(ProviderError::QuotaExhausted),
            s if !s.is_success() => {
                let body = response.text().await.unwrap_or_default();
                error!(status = %s, body = %body, "interpretation service error");
                return Err(ProviderError::Service {
                    status: s.as_u16(),
                    body,
                });
            }
            _ => {}
        }

        let body = response.text().await?;
        prompt::parse_command(&body)
    }
}
