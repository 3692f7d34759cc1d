use std::sync::Arc;
use std::time::Duration;

use aws_sdk_s3::Client as S3Client;
use odonto_interpret::provider::InterpretationProvider;

use crate::config::ServerConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub bucket: String,
    pub provider: Arc<dyn InterpretationProvider>,
    pub interpret_timeout: Duration,
    pub api_key: Option<Arc<str>>,
}

impl AppState {
    pub fn new(
        s3: S3Client,
        provider: Arc<dyn InterpretationProvider>,
        config: &ServerConfig,
    ) -> Self {
        Self {
            s3,
            bucket: config.bucket.clone(),
            provider,
            interpret_timeout: config.interpret_timeout,
            api_key: config.api_key.as_deref().map(Arc::from),
        }
    }
}
