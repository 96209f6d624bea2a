//! Review (resena) model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Review entity, attached to a complex or a specific court
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resena {
    pub id_resena: i64,
    pub id_usuario: i64,
    pub id_complejo: Option<i64>,
    pub id_cancha: Option<i64>,
    /// 1 to 5 stars
    pub calificacion: i32,
    pub comentario: Option<String>,
    pub fecha_creacion: String,
    pub fecha_actualizacion: String,
}

/// Create review payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResenaCreate {
    pub id_usuario: i64,
    pub id_complejo: Option<i64>,
    pub id_cancha: Option<i64>,
    #[validate(range(min = 1, max = 5, message = "la calificacion debe estar entre 1 y 5"))]
    pub calificacion: i32,
    pub comentario: Option<String>,
}

/// Update review payload (partial)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResenaUpdate {
    #[validate(range(min = 1, max = 5, message = "la calificacion debe estar entre 1 y 5"))]
    pub calificacion: Option<i32>,
    pub comentario: Option<String>,
}

/// Payload for `POST /resenas/{id}/reportar`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReporteResena {
    #[validate(length(min = 1, message = "el motivo es requerido"))]
    pub motivo: String,
}

/// List query for `GET /resenas`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResenaListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_complejo: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_cancha: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_usuario: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
