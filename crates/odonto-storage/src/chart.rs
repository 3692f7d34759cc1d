//! Per-patient chart documents.
//!
//! Each patient's chart is one JSON object at `charts/{patient_id}.json`.
//! Writers read the document with its ETag, reconcile, and write back with
//! that ETag as a precondition, so a concurrent edit is rejected instead of
//! silently overwritten.

use aws_sdk_s3::Client;
use odonto_core::models::chart_document::ChartDocument;
use odonto_core::storage_keys;
use tracing::info;
use uuid::Uuid;

use crate::error::StorageError;
use crate::state;

/// A chart document together with the ETag it was read at.
#[derive(Debug, Clone)]
pub struct StoredChart {
    pub document: ChartDocument,
    pub etag: String,
}

/// Load a patient's chart. `None` if the patient has no chart yet.
pub async fn load_chart(
    client: &Client,
    bucket: &str,
    patient_id: Uuid,
) -> Result<Option<StoredChart>, StorageError> {
    let key = storage_keys::chart(patient_id);
    let loaded = state::load_state_optional::<ChartDocument>(client, bucket, &key).await?;
    Ok(loaded.map(|(document, etag)| StoredChart { document, etag }))
}

/// Write a patient's chart.
///
/// With `expected_etag` the write succeeds only if the stored document is
/// still at that version; without it, only if no document exists yet.
/// Either way a lost race is `StorageError::PreconditionFailed`. Returns the
/// new ETag.
pub async fn save_chart(
    client: &Client,
    bucket: &str,
    document: &ChartDocument,
    expected_etag: Option<&str>,
) -> Result<String, StorageError> {
    let key = storage_keys::chart(document.patient_id);
    let etag = match expected_etag {
        Some(expected) => state::save_state_if_match(client, bucket, &key, document, expected).await?,
        None => state::save_state_if_absent(client, bucket, &key, document).await?,
    };

    info!(
        patient_id = %document.patient_id,
        teeth = document.chart.teeth.len(),
        etag = %etag,
        "chart saved"
    );
    Ok(etag)
}
