use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown surface: {0}")]
    UnknownSurface(String),

    #[error("unknown treatment code: {0}")]
    UnknownTreatment(String),

    #[error("unknown procedure status: {0}")]
    UnknownStatus(String),

    #[error("invalid FDI tooth number: {0}")]
    InvalidToothNumber(i32),
}

/// Why a structured command was rejected by the validator.
///
/// The `Display` text is for logs; clinicians see [`ValidationError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("command action is unknown")]
    NotActionable,

    #[error("confidence {0} is outside [0, 1]")]
    InvalidConfidence(String),

    #[error("toothNumber is missing")]
    MissingTooth,

    #[error("toothNumber {0} is not in the active dentition")]
    ToothNotInDentition(i32),

    #[error("treatment is missing")]
    MissingTreatment,

    #[error("treatment '{0}' is not in the treatment vocabulary")]
    UnknownTreatment(String),

    #[error("area '{0}' is not a tooth surface")]
    UnknownSurface(String),

    #[error("status '{0}' is not a procedure status")]
    UnknownStatus(String),

    #[error("change_status requires a target status")]
    MissingStatus,
}

impl ValidationError {
    /// The command field this error refers to, using wire names.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotActionable => "action",
            Self::InvalidConfidence(_) => "confidence",
            Self::MissingTooth | Self::ToothNotInDentition(_) => "toothNumber",
            Self::MissingTreatment | Self::UnknownTreatment(_) => "treatment",
            Self::UnknownSurface(_) => "area",
            Self::UnknownStatus(_) | Self::MissingStatus => "status",
        }
    }

    /// Localized (es) explanation shown to the clinician.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotActionable => {
                "No se reconoció ninguna acción en el comando. Repítelo con otras palabras."
                    .to_string()
            }
            Self::InvalidConfidence(c) => format!(
                "La confianza de la interpretación ({c}) no es válida. Repite el comando."
            ),
            Self::MissingTooth => {
                "No se indicó el número de diente. Repite el comando incluyendo el diente."
                    .to_string()
            }
            Self::ToothNotInDentition(n) => format!(
                "El diente {n} no existe en la dentición seleccionada. Revisa el número y repite el comando."
            ),
            Self::MissingTreatment => {
                "No se indicó el tratamiento. Repite el comando incluyendo el tratamiento."
                    .to_string()
            }
            Self::UnknownTreatment(t) => format!(
                "El tratamiento \"{t}\" no está en la lista de tratamientos. Repite el comando con otro nombre."
            ),
            Self::UnknownSurface(a) => format!(
                "La superficie \"{a}\" no es válida. Usa oclusal, vestibular, lingual, mesial o distal."
            ),
            Self::UnknownStatus(s) => format!(
                "El estado \"{s}\" no es válido. Usa diagnóstico, pendiente o realizado."
            ),
            Self::MissingStatus => {
                "Para cambiar el estado indica si es diagnóstico, pendiente o realizado."
                    .to_string()
            }
        }
    }
}
