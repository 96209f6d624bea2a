//! Reservation (reserva) model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Reservation lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservaEstado {
    Pendiente,
    Confirmada,
    Cancelada,
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reserva {
    pub id_reserva: i64,
    pub id_usuario: i64,
    pub id_cancha: i64,
    /// ISO datetime
    pub inicio: String,
    /// ISO datetime
    pub fin: String,
    pub estado: ReservaEstado,
    pub precio_total: f64,
    pub notas: Option<String>,
    pub fecha_creacion: String,
    pub fecha_actualizacion: String,
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReservaCreate {
    pub id_usuario: i64,
    pub id_cancha: i64,
    #[validate(length(min = 1, message = "inicio es requerido"))]
    pub inicio: String,
    #[validate(length(min = 1, message = "fin es requerido"))]
    pub fin: String,
    pub notas: Option<String>,
}

/// Update reservation payload (schedule / notes only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservaUpdate {
    pub inicio: Option<String>,
    pub fin: Option<String>,
    pub notas: Option<String>,
}

/// Payload for `PATCH /reservas/{id}/cancelar`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CancelacionReserva {
    pub motivo: Option<String>,
}

/// List query for `GET /reservas`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservaListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_usuario: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_cancha: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<ReservaEstado>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desde: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hasta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
