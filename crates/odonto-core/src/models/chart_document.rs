use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::chart::ChartState;
use super::tooth::Dentition;

/// The persisted chart of one patient, stored as a single JSON document and
/// rewritten wholesale after every successful command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartDocument {
    pub patient_id: Uuid,
    pub dentition: Dentition,
    pub chart: ChartState,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl ChartDocument {
    /// An empty chart for a patient seen for the first time.
    pub fn empty(patient_id: Uuid, dentition: Dentition, now: jiff::Timestamp) -> Self {
        Self {
            patient_id,
            dentition,
            chart: ChartState::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
