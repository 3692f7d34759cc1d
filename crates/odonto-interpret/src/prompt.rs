//! Domain-knowledge prompt for the interpretation model.
//!
//! Colloquial vocabulary is resolved by the model, not by code, but the
//! mapping it is taught lives here as data so the prompt and the tests share
//! one table. Changing a row changes what a dictated sentence means.

use odonto_core::models::command::{InterpretationRequest, StructuredCommand};
use odonto_core::models::procedure::ProcedureStatus;
use odonto_core::models::surface::Surface;
use odonto_core::models::treatment::Treatment;

use crate::error::ProviderError;

/// Colloquial phrases that name a treatment code.
#[derive(Debug, Clone, Copy)]
pub struct Synonym {
    pub heard: &'static [&'static str],
    pub treatment: Treatment,
    /// Status implied by the phrase itself, if any.
    pub status: Option<ProcedureStatus>,
}

pub const TREATMENT_SYNONYMS: &[Synonym] = &[
    Synonym {
        heard: &["caries"],
        treatment: Treatment::Obturacion,
        status: Some(ProcedureStatus::Diagnostico),
    },
    Synonym {
        heard: &["empaste", "resina", "calza"],
        treatment: Treatment::Obturacion,
        status: None,
    },
    Synonym {
        heard: &["conducto", "nervio", "matar el nervio"],
        treatment: Treatment::Endodoncia,
        status: None,
    },
    Synonym {
        heard: &["brackets", "frenillos", "aparatos"],
        treatment: Treatment::Ortodoncia,
        status: None,
    },
    Synonym {
        heard: &["sacar", "extraer", "muela fuera"],
        treatment: Treatment::Extraccion,
        status: None,
    },
    Synonym {
        heard: &["profilaxis", "limpieza dental"],
        treatment: Treatment::Limpieza,
        status: None,
    },
    Synonym {
        heard: &["funda"],
        treatment: Treatment::Corona,
        status: None,
    },
    Synonym {
        heard: &["sellante", "sellador"],
        treatment: Treatment::Selladores,
        status: None,
    },
    Synonym {
        heard: &["placa de descarga", "férula"],
        treatment: Treatment::Placa,
        status: None,
    },
    Synonym {
        heard: &["encías", "sarro profundo", "raspado"],
        treatment: Treatment::Periodoncia,
        status: None,
    },
    Synonym {
        heard: &["flúor", "fluorización"],
        treatment: Treatment::Fluor,
        status: None,
    },
    Synonym {
        heard: &["rayos x", "radiografía", "rx"],
        treatment: Treatment::Radiografias,
        status: None,
    },
    Synonym {
        heard: &["implante"],
        treatment: Treatment::Implantes,
        status: None,
    },
    Synonym {
        heard: &["puente"],
        treatment: Treatment::Puentes,
        status: None,
    },
    Synonym {
        heard: &["carilla"],
        treatment: Treatment::Carillas,
        status: None,
    },
    Synonym {
        heard: &["blanquear"],
        treatment: Treatment::Blanqueamiento,
        status: None,
    },
    Synonym {
        heard: &["frenillo lingual", "frenillo"],
        treatment: Treatment::Frenectomia,
        status: None,
    },
];

pub const SURFACE_SYNONYMS: &[(&str, Surface)] = &[
    ("bucal", Surface::Vestibular),
    ("palatino", Surface::Lingual),
    ("palatina", Surface::Lingual),
    ("incisal", Surface::Oclusal),
];

pub const STATUS_SYNONYMS: &[(&str, ProcedureStatus)] = &[
    ("hecho", ProcedureStatus::Realizado),
    ("hecha", ProcedureStatus::Realizado),
    ("realizada", ProcedureStatus::Realizado),
    ("terminado", ProcedureStatus::Realizado),
    ("por hacer", ProcedureStatus::Pendiente),
    ("pendiente", ProcedureStatus::Pendiente),
    ("planificado", ProcedureStatus::Pendiente),
    ("observado", ProcedureStatus::Diagnostico),
    ("hay", ProcedureStatus::Diagnostico),
    ("tiene", ProcedureStatus::Diagnostico),
];

const PREAMBLE: &str = "\
You interpret voice commands dictated by a dentist, in Spanish, while filling \
in a patient's odontogram. Convert the transcript into exactly one JSON object \
and nothing else.

## Output schema

{\"action\": \"apply_treatment\" | \"remove_treatment\" | \"change_status\" | \"unknown\",
 \"toothNumber\": number | null,
 \"treatment\": string | null,
 \"area\": \"oclusal\" | \"vestibular\" | \"lingual\" | \"mesial\" | \"distal\" | null,
 \"status\": \"diagnostico\" | \"pendiente\" | \"realizado\" | null,
 \"confidence\": number between 0 and 1,
 \"message\": short Spanish sentence describing what you understood}

## Rules

- Teeth use FDI two-digit notation: first digit is the quadrant (1-4 permanent, \
5-8 primary), second digit the position from the midline (1-8 permanent, 1-5 primary). \
\"el dieciséis\" or \"uno seis\" is tooth 16.
- toothNumber must be one of the available teeth listed in the request.
- treatment must be one of the available treatment codes listed in the request, \
spelled exactly as listed, without accents.
- area is null when the dentist names no surface; that means the whole tooth.
- status is null when not stated, except where a synonym below implies one.
- Use \"remove_treatment\" for phrases like \"quitar\", \"borrar\", \"eliminar\".
- Use \"change_status\" when the dentist says an existing treatment is now done, \
pending or observed (\"marcar como realizada\", \"ya está hecha\").
- If anything is ambiguous or missing, answer with action \"unknown\", a low \
confidence and a message asking the dentist to repeat the command.";

/// The fixed system prompt, including the synonym tables.
pub fn system_prompt() -> String {
    let mut prompt = String::from(PREAMBLE);

    prompt.push_str("\n\n## Surfaces\n\n");
    prompt.push_str("oclusal, vestibular, lingual, mesial, distal.\n");
    for (heard, surface) in SURFACE_SYNONYMS {
        prompt.push_str(&format!("- \"{heard}\" means {surface}\n"));
    }

    prompt.push_str("\n## Statuses\n\n");
    prompt.push_str("diagnostico (observed), pendiente (to do), realizado (done).\n");
    for (heard, status) in STATUS_SYNONYMS {
        prompt.push_str(&format!("- \"{heard}\" means {status}\n"));
    }

    prompt.push_str("\n## Treatments\n\n");
    for treatment in Treatment::ALL {
        prompt.push_str(&format!("- {treatment}: {}\n", treatment.label()));
    }

    prompt.push_str("\n## Treatment synonyms\n\n");
    for synonym in TREATMENT_SYNONYMS {
        let heard = synonym
            .heard
            .iter()
            .map(|h| format!("\"{h}\""))
            .collect::<Vec<_>>()
            .join(", ");
        match synonym.status {
            Some(status) => prompt.push_str(&format!(
                "- {heard} means treatment {} with status {status}\n",
                synonym.treatment
            )),
            None => prompt.push_str(&format!(
                "- {heard} means treatment {}\n",
                synonym.treatment
            )),
        }
    }

    prompt
}

/// The per-request user turn: the transcript plus the closed vocabularies.
pub fn user_message(request: &InterpretationRequest) -> String {
    let teeth = request
        .available_teeth
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "<available_treatments>{}</available_treatments>\n\
         <available_teeth>{teeth}</available_teeth>\n\
         <transcript>{}</transcript>",
        request.available_treatments.join(", "),
        request.transcript,
    )
}

/// Parse a model or service reply into a command.
///
/// Models sometimes wrap the object in prose or a code fence, so the text
/// between the first `{` and the last `}` is parsed.
pub fn parse_command(text: &str) -> Result<StructuredCommand, ProviderError> {
    let start = text.find('{');
    let end = text.rfind('}');

    let json = match (start, end) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => {
            return Err(ProviderError::MalformedResponse(format!(
                "no JSON object in response: {text}"
            )));
        }
    };

    serde_json::from_str(json).map_err(|e| {
        ProviderError::MalformedResponse(format!(
            "failed to parse StructuredCommand: {e}. Response: {text}"
        ))
    })
}
