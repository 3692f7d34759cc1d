use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::procedure::ProcedureStatus;
use super::surface::Surface;
use super::tooth::ToothNumber;
use super::treatment::Treatment;
use crate::error::ValidationError;
use crate::vocabulary::Vocabulary;

/// What a voice command asks the chart to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CommandAction {
    ApplyTreatment,
    RemoveTreatment,
    ChangeStatus,
    Unknown,
}

/// Body sent to the interpretation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InterpretationRequest {
    pub transcript: String,
    pub available_treatments: Vec<String>,
    pub available_teeth: Vec<i32>,
}

impl InterpretationRequest {
    pub fn new(transcript: impl Into<String>, vocabulary: &Vocabulary) -> Self {
        Self {
            transcript: transcript.into(),
            available_treatments: vocabulary.treatment_codes(),
            available_teeth: vocabulary.tooth_numbers(),
        }
    }
}

/// The interpretation contract: an unvalidated command as produced by the
/// interpretation service.
///
/// Fields are kept as raw wire values so that out-of-vocabulary output can be
/// detected and reported by the validator instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StructuredCommand {
    pub action: CommandAction,
    pub tooth_number: Option<i32>,
    pub treatment: Option<String>,
    pub area: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub message: String,
}

impl StructuredCommand {
    /// A non-actionable command carrying an explanation for the clinician.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            action: CommandAction::Unknown,
            tooth_number: None,
            treatment: None,
            area: None,
            status: None,
            confidence: 0.0,
            message: message.into(),
        }
    }

    pub fn is_actionable(&self) -> bool {
        self.action != CommandAction::Unknown
    }
}

/// Typed form of an actionable command, the only input the reducer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartCommand {
    pub action: ChartAction,
    pub tooth: ToothNumber,
    pub treatment: Treatment,
    /// `None` targets all five surfaces.
    pub area: Option<Surface>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartAction {
    /// Record `treatment` with this status (defaulted to diagnostico).
    Apply { status: ProcedureStatus },
    /// Strip `treatment` from the targeted surfaces, whatever its status.
    Remove,
    /// Move the targeted surfaces of `treatment` to a new status.
    ChangeStatus { to: ProcedureStatus },
}

impl ChartCommand {
    pub fn target_surfaces(&self) -> BTreeSet<Surface> {
        match self.area {
            Some(surface) => BTreeSet::from([surface]),
            None => Surface::all(),
        }
    }
}

impl TryFrom<&StructuredCommand> for ChartCommand {
    type Error = ValidationError;

    /// Parse the wire fields against the global closed sets. Membership in
    /// the active dentition is checked by [`crate::validate`].
    fn try_from(cmd: &StructuredCommand) -> Result<Self, Self::Error> {
        if !cmd.is_actionable() {
            return Err(ValidationError::NotActionable);
        }

        if !(0.0..=1.0).contains(&cmd.confidence) {
            return Err(ValidationError::InvalidConfidence(cmd.confidence.to_string()));
        }

        let number = cmd.tooth_number.ok_or(ValidationError::MissingTooth)?;
        let tooth =
            ToothNumber::new(number).map_err(|_| ValidationError::ToothNotInDentition(number))?;

        let code = cmd
            .treatment
            .as_deref()
            .ok_or(ValidationError::MissingTreatment)?;
        let treatment = code
            .parse::<Treatment>()
            .map_err(|_| ValidationError::UnknownTreatment(code.to_string()))?;

        let area = cmd
            .area
            .as_deref()
            .map(|a| {
                a.parse::<Surface>()
                    .map_err(|_| ValidationError::UnknownSurface(a.to_string()))
            })
            .transpose()?;

        let status = cmd
            .status
            .as_deref()
            .map(|s| {
                s.parse::<ProcedureStatus>()
                    .map_err(|_| ValidationError::UnknownStatus(s.to_string()))
            })
            .transpose()?;

        let action = match cmd.action {
            CommandAction::ApplyTreatment => ChartAction::Apply {
                status: status.unwrap_or_default(),
            },
            CommandAction::RemoveTreatment => ChartAction::Remove,
            CommandAction::ChangeStatus => ChartAction::ChangeStatus {
                to: status.ok_or(ValidationError::MissingStatus)?,
            },
            CommandAction::Unknown => return Err(ValidationError::NotActionable),
        };

        Ok(Self {
            action,
            tooth,
            treatment,
            area,
        })
    }
}
