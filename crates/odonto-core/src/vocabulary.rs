//! Closed vocabularies a command is checked against.

use std::collections::BTreeSet;

use crate::models::tooth::{Dentition, ToothNumber};
use crate::models::treatment::Treatment;

/// Valid treatment codes and valid tooth numbers for the active chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    treatments: BTreeSet<Treatment>,
    teeth: BTreeSet<ToothNumber>,
}

impl Vocabulary {
    pub fn new(
        treatments: impl IntoIterator<Item = Treatment>,
        teeth: impl IntoIterator<Item = ToothNumber>,
    ) -> Self {
        Self {
            treatments: treatments.into_iter().collect(),
            teeth: teeth.into_iter().collect(),
        }
    }

    /// Every treatment code and every tooth of `dentition`.
    pub fn for_dentition(dentition: Dentition) -> Self {
        Self::new(Treatment::ALL, dentition.teeth())
    }

    /// Build from the raw lists carried by an interpretation request.
    ///
    /// Entries outside the global closed sets are dropped, so a caller can
    /// only ever narrow the vocabulary.
    pub fn from_wire(treatments: &[String], teeth: &[i32]) -> Self {
        Self::new(
            treatments.iter().filter_map(|code| code.parse().ok()),
            teeth.iter().filter_map(|n| ToothNumber::new(*n).ok()),
        )
    }

    pub fn contains_treatment(&self, treatment: Treatment) -> bool {
        self.treatments.contains(&treatment)
    }

    pub fn contains_tooth(&self, tooth: ToothNumber) -> bool {
        self.teeth.contains(&tooth)
    }

    pub fn treatment_codes(&self) -> Vec<String> {
        self.treatments.iter().map(|t| t.code().to_string()).collect()
    }

    pub fn tooth_numbers(&self) -> Vec<i32> {
        self.teeth.iter().map(|t| i32::from(*t)).collect()
    }
}
