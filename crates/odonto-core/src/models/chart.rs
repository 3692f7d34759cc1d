use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::procedure::ProcedureRecord;
use super::tooth::ToothNumber;

/// Procedure history of a single tooth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToothState {
    pub number: ToothNumber,
    pub procedures: Vec<ProcedureRecord>,
}

impl ToothState {
    pub fn new(number: ToothNumber) -> Self {
        Self {
            number,
            procedures: Vec::new(),
        }
    }
}

/// Per-patient odontogram: tooth number to procedure history.
///
/// Teeth appear lazily on their first recorded procedure and are never
/// removed; a fully cleared tooth keeps an empty procedure list. New
/// versions are produced only by [`crate::reconcile`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartState {
    pub teeth: BTreeMap<ToothNumber, ToothState>,
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tooth(&self, number: ToothNumber) -> Option<&ToothState> {
        self.teeth.get(&number)
    }

    /// Procedures recorded on a tooth; empty if the tooth has no entry.
    pub fn procedures(&self, number: ToothNumber) -> &[ProcedureRecord] {
        self.teeth
            .get(&number)
            .map(|tooth| tooth.procedures.as_slice())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.teeth.is_empty()
    }
}
