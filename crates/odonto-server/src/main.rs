use std::sync::Arc;

use aws_config::BehaviorVersion;
use odonto_interpret::provider::BedrockProvider;
use odonto_server::config::ServerConfig;
use odonto_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;

    let s3 = aws_sdk_s3::Client::new(&sdk_config);
    let provider = BedrockProvider::new(&sdk_config, &config.model_id);

    tracing::info!(
        bucket = %config.bucket,
        model = provider.model_id(),
        timeout_secs = config.interpret_timeout.as_secs(),
        api_key = config.api_key.is_some(),
        "starting odonto-server"
    );

    let state = AppState::new(s3, Arc::new(provider), &config);

    lambda_http::run(odonto_server::router(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
