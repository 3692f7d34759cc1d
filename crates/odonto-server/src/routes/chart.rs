use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use odonto_core::models::chart_document::ChartDocument;
use odonto_core::models::command::{ChartCommand, StructuredCommand};
use odonto_core::models::tooth::Dentition;
use odonto_core::reconcile;
use odonto_core::validate::to_chart_command;
use odonto_core::vocabulary::Vocabulary;
use odonto_storage::chart::{StoredChart, load_chart, save_chart};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    /// Dentition of the empty chart returned for a new patient.
    pub dentition: Option<Dentition>,
}

#[derive(Debug, Deserialize)]
pub struct ApplyCommandRequest {
    pub command: StructuredCommand,
    /// Overrides the stored chart's dentition, e.g. when the clinician
    /// switches a child's chart to permanent teeth.
    #[serde(default)]
    pub dentition: Option<Dentition>,
}

pub async fn get_chart(
    State(state): State<AppState>,
    Path(patient_id): Path<Uuid>,
    Query(query): Query<ChartQuery>,
) -> Result<Response, ApiError> {
    match load_chart(&state.s3, &state.bucket, patient_id).await? {
        Some(StoredChart { document, etag }) => Ok(with_etag(document, &etag)),
        None => {
            let dentition = query.dentition.unwrap_or_default();
            let empty = ChartDocument::empty(patient_id, dentition, jiff::Timestamp::now());
            Ok(Json(empty).into_response())
        }
    }
}

/// Validate one command, reconcile it into the stored chart and save.
///
/// Returns 422 with the validator's `unknown` command when the command is
/// not applicable, and 409 when the chart changed since it was loaded.
pub async fn apply_command(
    State(state): State<AppState>,
    Path(patient_id): Path<Uuid>,
    Json(request): Json<ApplyCommandRequest>,
) -> Result<Response, ApiError> {
    // Shape checks need no chart, so reject early.
    ChartCommand::try_from(&request.command)
        .map_err(|e| ApiError::Unprocessable(StructuredCommand::unknown(e.user_message())))?;

    let now = jiff::Timestamp::now();
    let (mut document, etag) = match load_chart(&state.s3, &state.bucket, patient_id).await? {
        Some(StoredChart { document, etag }) => (document, Some(etag)),
        None => {
            let dentition = request.dentition.unwrap_or_default();
            (ChartDocument::empty(patient_id, dentition, now), None)
        }
    };
    if let Some(dentition) = request.dentition {
        document.dentition = dentition;
    }

    let vocabulary = Vocabulary::for_dentition(document.dentition);
    let command = to_chart_command(&request.command, &vocabulary)
        .map_err(|e| ApiError::Unprocessable(StructuredCommand::unknown(e.user_message())))?;

    document.chart = reconcile::apply_command(&document.chart, &command, now);
    document.updated_at = now;

    let new_etag = save_chart(&state.s3, &state.bucket, &document, etag.as_deref()).await?;

    tracing::info!(
        patient_id = %patient_id,
        tooth = %command.tooth,
        treatment = %command.treatment,
        "chart command applied"
    );

    Ok(with_etag(document, &new_etag))
}

fn with_etag(document: ChartDocument, etag: &str) -> Response {
    let mut response = Json(document).into_response();
    if let Ok(value) = HeaderValue::from_str(etag) {
        response.headers_mut().insert(header::ETAG, value);
    }
    response
}
