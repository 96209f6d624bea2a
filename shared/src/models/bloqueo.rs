//! Temporary block (bloqueo) model

use serde::{Deserialize, Serialize};

/// A temporary closure of a court: maintenance, events, weather.
///
/// Date-bounded, optionally time-bounded within each day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloqueoTemporal {
    pub id_bloqueo: i64,
    pub id_complejo: i64,
    pub id_cancha: i64,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub hora_inicio: Option<String>,
    pub hora_fin: Option<String>,
    pub motivo: Option<String>,
    pub activo: bool,
}
