//! Document key conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of documents in the Odonto bucket.

use uuid::Uuid;

pub const CHARTS_PREFIX: &str = "charts/";

pub fn chart(patient_id: Uuid) -> String {
    format!("{CHARTS_PREFIX}{patient_id}.json")
}
