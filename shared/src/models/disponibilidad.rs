//! Availability tree and occupancy statistics
//!
//! The tree (`DisponibilidadComplejo` → `DisponibilidadCancha` →
//! `DisponibilidadDia` → `DisponibilidadSlot`) is a read-only projection
//! fetched per request; nothing here is ever persisted by the BFF.

use serde::{Deserialize, Serialize};

/// A fixed time interval on a date for a court, free or already reserved.
///
/// Invariants (guaranteed by the upstream): `hora_inicio < hora_fin`,
/// `precio >= 0`. Times are `HH:MM`, dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisponibilidadSlot {
    pub fecha: String,
    pub hora_inicio: String,
    pub hora_fin: String,
    pub disponible: bool,
    /// Defaults to 0 when the upstream omits it
    #[serde(default)]
    pub precio: f64,
    pub id_cancha: i64,
    pub id_complejo: i64,
}

/// One day of a court, slots sorted by start time ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisponibilidadDia {
    pub fecha: String,
    pub dia_semana: String,
    pub slots: Vec<DisponibilidadSlot>,
}

/// One court, days sorted by date ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisponibilidadCancha {
    pub id_cancha: i64,
    pub nombre_cancha: String,
    pub deporte: String,
    pub dias: Vec<DisponibilidadDia>,
}

/// Availability tree for a whole complex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisponibilidadComplejo {
    pub id_complejo: i64,
    pub nombre_complejo: String,
    pub canchas: Vec<DisponibilidadCancha>,
}

/// Query for `GET /disponibilidad`.
///
/// `id_complejo` and `id_cancha` are alternatives; a complex id means
/// "all of its courts". The date range is inclusive on both ends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsultaDisponibilidad {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_complejo: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_cancha: Option<i64>,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hora_inicio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hora_fin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solo_disponibles: Option<bool>,
}

/// Query for `GET /disponibilidad/verificar`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificacionSlot {
    pub id_cancha: i64,
    pub fecha: String,
    pub hora_inicio: String,
    pub hora_fin: String,
}

/// Upstream answer to a slot verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificacionRespuesta {
    pub disponible: bool,
}

/// Slot-level occupancy statistics, derived per query and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstadisticasOcupacion {
    /// Occupied fraction in [0, 1], rounded to 2 decimals
    pub ocupacion_promedio: f64,
    pub total_slots: u64,
    pub slots_ocupados: u64,
    pub slots_disponibles: u64,
    /// Sum of occupied slots' prices, rounded to 2 decimals
    pub ingresos_estimados: f64,
}
