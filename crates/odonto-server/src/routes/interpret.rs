use axum::Json;
use axum::extract::State;
use odonto_core::models::command::{InterpretationRequest, StructuredCommand};
use odonto_core::models::tooth::Dentition;
use odonto_core::validate::validate;
use odonto_core::vocabulary::Vocabulary;
use odonto_interpret::error::ProviderError;
use odonto_interpret::interpreter::explain_unknown;
use odonto_interpret::messages;

use crate::error::ApiError;
use crate::state::AppState;

/// Interpret one transcript.
///
/// The reply is always validated against the request's vocabulary, so an
/// out-of-vocabulary answer from the model comes back as an `unknown`
/// command with status 200. Provider failures map to 429, 402, 502 and 504.
pub async fn interpret(
    State(state): State<AppState>,
    Json(request): Json<InterpretationRequest>,
) -> Result<Json<StructuredCommand>, ApiError> {
    let transcript = request.transcript.trim();
    if transcript.is_empty() {
        return Err(ApiError::BadRequest(messages::EMPTY_TRANSCRIPT.to_string()));
    }

    let vocabulary = request_vocabulary(&request);
    let request = InterpretationRequest::new(transcript, &vocabulary);

    let command = tokio::time::timeout(state.interpret_timeout, state.provider.interpret(&request))
        .await
        .unwrap_or(Err(ProviderError::Timeout(state.interpret_timeout)))?;

    let validated = explain_unknown(validate(&command, &vocabulary));
    tracing::info!(
        provider = state.provider.name(),
        action = ?validated.action,
        confidence = validated.confidence,
        downgraded = validated != command,
        "transcript interpreted"
    );

    Ok(Json(validated))
}

/// The vocabulary a request is checked against. A request that lists
/// neither treatments nor teeth gets the full permanent vocabulary.
fn request_vocabulary(request: &InterpretationRequest) -> Vocabulary {
    if request.available_treatments.is_empty() && request.available_teeth.is_empty() {
        Vocabulary::for_dentition(Dentition::Permanent)
    } else {
        Vocabulary::from_wire(&request.available_treatments, &request.available_teeth)
    }
}
