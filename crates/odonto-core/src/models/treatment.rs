use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Treatment codes recognised by the chart.
///
/// This is the closed vocabulary sent to the interpretation service with
/// every request. Note that `corona` and `coronas` are distinct codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Treatment {
    Diagnostico,
    Limpieza,
    Obturacion,
    Extraccion,
    Endodoncia,
    Corona,
    Blanqueamiento,
    Radiografias,
    Selladores,
    Implantes,
    Coronas,
    Puentes,
    Carillas,
    Apicectomia,
    Prostodoncia,
    Cirugia,
    Ortodoncia,
    Placa,
    Periodoncia,
    Fluor,
    Frenectomia,
}

impl Treatment {
    pub const ALL: [Treatment; 21] = [
        Treatment::Diagnostico,
        Treatment::Limpieza,
        Treatment::Obturacion,
        Treatment::Extraccion,
        Treatment::Endodoncia,
        Treatment::Corona,
        Treatment::Blanqueamiento,
        Treatment::Radiografias,
        Treatment::Selladores,
        Treatment::Implantes,
        Treatment::Coronas,
        Treatment::Puentes,
        Treatment::Carillas,
        Treatment::Apicectomia,
        Treatment::Prostodoncia,
        Treatment::Cirugia,
        Treatment::Ortodoncia,
        Treatment::Placa,
        Treatment::Periodoncia,
        Treatment::Fluor,
        Treatment::Frenectomia,
    ];

    /// Wire code, e.g. `"obturacion"`.
    pub fn code(self) -> &'static str {
        match self {
            Treatment::Diagnostico => "diagnostico",
            Treatment::Limpieza => "limpieza",
            Treatment::Obturacion => "obturacion",
            Treatment::Extraccion => "extraccion",
            Treatment::Endodoncia => "endodoncia",
            Treatment::Corona => "corona",
            Treatment::Blanqueamiento => "blanqueamiento",
            Treatment::Radiografias => "radiografias",
            Treatment::Selladores => "selladores",
            Treatment::Implantes => "implantes",
            Treatment::Coronas => "coronas",
            Treatment::Puentes => "puentes",
            Treatment::Carillas => "carillas",
            Treatment::Apicectomia => "apicectomia",
            Treatment::Prostodoncia => "prostodoncia",
            Treatment::Cirugia => "cirugia",
            Treatment::Ortodoncia => "ortodoncia",
            Treatment::Placa => "placa",
            Treatment::Periodoncia => "periodoncia",
            Treatment::Fluor => "fluor",
            Treatment::Frenectomia => "frenectomia",
        }
    }

    /// Display label in the clinic's locale.
    pub fn label(self) -> &'static str {
        match self {
            Treatment::Diagnostico => "Diagnóstico",
            Treatment::Limpieza => "Limpieza",
            Treatment::Obturacion => "Obturación",
            Treatment::Extraccion => "Extracción",
            Treatment::Endodoncia => "Endodoncia",
            Treatment::Corona => "Corona",
            Treatment::Blanqueamiento => "Blanqueamiento",
            Treatment::Radiografias => "Radiografías",
            Treatment::Selladores => "Selladores",
            Treatment::Implantes => "Implantes",
            Treatment::Coronas => "Coronas",
            Treatment::Puentes => "Puentes",
            Treatment::Carillas => "Carillas",
            Treatment::Apicectomia => "Apicectomía",
            Treatment::Prostodoncia => "Prostodoncia",
            Treatment::Cirugia => "Cirugía",
            Treatment::Ortodoncia => "Ortodoncia",
            Treatment::Placa => "Placa",
            Treatment::Periodoncia => "Periodoncia",
            Treatment::Fluor => "Flúor",
            Treatment::Frenectomia => "Frenectomía",
        }
    }
}

impl fmt::Display for Treatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Treatment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|treatment| treatment.code() == s)
            .ok_or_else(|| CoreError::UnknownTreatment(s.to_string()))
    }
}
