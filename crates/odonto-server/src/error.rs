use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use odonto_core::models::command::StructuredCommand;
use odonto_interpret::error::ProviderError;
use odonto_storage::error::StorageError;
use serde::Serialize;

pub const CHART_CONFLICT: &str =
    "El odontograma cambió mientras se aplicaba el comando. Vuelve a cargarlo y repite el comando.";

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    /// Lost an optimistic-locking race on the chart document.
    Conflict(String),
    /// The command did not validate; carries the `unknown` command the
    /// validator produced.
    Unprocessable(StructuredCommand),
    RateLimited(String),
    QuotaExhausted(String),
    BadGateway(String),
    GatewayTimeout(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<StructuredCommand>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, command) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
            ApiError::Unprocessable(cmd) => {
                (StatusCode::UNPROCESSABLE_ENTITY, cmd.message.clone(), Some(cmd))
            }
            ApiError::RateLimited(msg) => (StatusCode::TOO_MANY_REQUESTS, msg, None),
            ApiError::QuotaExhausted(msg) => (StatusCode::PAYMENT_REQUIRED, msg, None),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg, None),
            ApiError::GatewayTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg, None),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    None,
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                error: message,
                command,
            }),
        )
            .into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound { key } => ApiError::NotFound(format!("object not found: {key}")),
            StorageError::PreconditionFailed { key } => {
                tracing::warn!(key = %key, "chart write lost a concurrent update");
                ApiError::Conflict(CHART_CONFLICT.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(e: ProviderError) -> Self {
        tracing::warn!(error = %e, "interpretation provider failed");
        let message = e.user_message().to_string();
        match e {
            ProviderError::RateLimited => ApiError::RateLimited(message),
            ProviderError::QuotaExhausted => ApiError::QuotaExhausted(message),
            ProviderError::Timeout(_) | ProviderError::ModelTimeout(_) => {
                ApiError::GatewayTimeout(message)
            }
            ProviderError::Service { .. }
            | ProviderError::Invocation(_)
            | ProviderError::Transport(_)
            | ProviderError::MalformedResponse(_) => ApiError::BadGateway(message),
        }
    }
}
