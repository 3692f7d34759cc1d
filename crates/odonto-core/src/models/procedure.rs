use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::surface::Surface;
use super::treatment::Treatment;
use crate::error::CoreError;

/// Workflow marker on a procedure annotation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ProcedureStatus {
    /// Observed during examination.
    #[default]
    Diagnostico,
    /// Planned, still to do.
    Pendiente,
    /// Done.
    Realizado,
}

impl ProcedureStatus {
    pub const ALL: [ProcedureStatus; 3] = [
        ProcedureStatus::Diagnostico,
        ProcedureStatus::Pendiente,
        ProcedureStatus::Realizado,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ProcedureStatus::Diagnostico => "diagnostico",
            ProcedureStatus::Pendiente => "pendiente",
            ProcedureStatus::Realizado => "realizado",
        }
    }
}

impl fmt::Display for ProcedureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ProcedureStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| CoreError::UnknownStatus(s.to_string()))
    }
}

/// A treatment annotation on a set of surfaces of one tooth.
///
/// A tooth holds at most one record per `(treatment, status)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProcedureRecord {
    #[serde(rename = "type")]
    pub treatment: Treatment,
    pub status: ProcedureStatus,
    pub segments: BTreeSet<Surface>,
    pub applied_at: jiff::Timestamp,
}
