//! Clinician-facing messages (es).

pub const EMPTY_TRANSCRIPT: &str =
    "No se escuchó ningún comando. Comprueba que el micrófono tenga permiso y vuelve a intentarlo.";

pub const RATE_LIMITED: &str =
    "El servicio de interpretación está recibiendo demasiadas solicitudes. Espera unos segundos y repite el comando.";

pub const QUOTA_EXHAUSTED: &str =
    "Se agotó el crédito del servicio de interpretación. Avisa al administrador; repetir el comando no ayudará por ahora.";

pub const SERVICE_UNAVAILABLE: &str =
    "El servicio de interpretación no está disponible en este momento. Inténtalo de nuevo más tarde.";

pub const NETWORK_FAILURE: &str =
    "No se pudo contactar con el servicio de interpretación. Revisa la conexión e inténtalo de nuevo.";

pub const MALFORMED_RESPONSE: &str =
    "No se pudo entender la respuesta del servicio. Repite el comando con otras palabras.";

pub const TIMED_OUT: &str =
    "El servicio de interpretación tardó demasiado en responder. Repite el comando.";

pub const LOW_CONFIDENCE: &str =
    "No estoy seguro de haber entendido el comando. Repítelo indicando diente, tratamiento y superficie.";

pub const NOT_UNDERSTOOD: &str =
    "No entendí el comando. Repítelo indicando diente, tratamiento y superficie.";
