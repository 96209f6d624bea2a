//! Weekly schedule (horario) model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One weekly opening-hours row for a complex or a specific court.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Horario {
    pub id_horario: i64,
    pub id_complejo: i64,
    /// Absent means the row applies to the whole complex
    pub id_cancha: Option<i64>,
    /// Lowercase Spanish weekday name, see [`crate::util::DIAS_SEMANA`]
    pub dia_semana: String,
    pub hora_apertura: String,
    pub hora_cierre: String,
}

/// Create schedule payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HorarioCreate {
    pub id_complejo: i64,
    pub id_cancha: Option<i64>,
    #[validate(length(min = 1, message = "dia_semana es requerido"))]
    pub dia_semana: String,
    #[validate(length(min = 1, message = "hora_apertura es requerida"))]
    pub hora_apertura: String,
    #[validate(length(min = 1, message = "hora_cierre es requerida"))]
    pub hora_cierre: String,
}

/// Update schedule payload (partial)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HorarioUpdate {
    pub dia_semana: Option<String>,
    pub hora_apertura: Option<String>,
    pub hora_cierre: Option<String>,
}

/// List query for `GET /horarios`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HorarioListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_complejo: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_cancha: Option<i64>,
}
