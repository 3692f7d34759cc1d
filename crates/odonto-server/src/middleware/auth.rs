use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use subtle::ConstantTimeEq;

use crate::error::ApiError;
use crate::state::AppState;

pub const UNAUTHORIZED: &str = "Falta la clave de acceso o no es válida.";

/// API key middleware.
///
/// Accepts the key in an `apikey` header or as `Authorization: Bearer
/// <key>`, compared in constant time. With no key configured every request
/// passes.
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(expected) = state.api_key.as_deref() else {
        return Ok(next.run(req).await);
    };

    let matches = presented_key(req.headers())
        .is_some_and(|key| bool::from(key.as_bytes().ct_eq(expected.as_bytes())));
    if !matches {
        tracing::warn!(path = %req.uri().path(), "rejected request without valid api key");
        return Err(ApiError::Unauthorized(UNAUTHORIZED.to_string()));
    }

    Ok(next.run(req).await)
}

fn presented_key(headers: &HeaderMap) -> Option<&str> {
    if let Some(key) = headers.get("apikey").and_then(|v| v.to_str().ok()) {
        return Some(key);
    }
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}
