//! Availability API handlers
//!
//! Read-only query facade over the upstream availability endpoints.
//! Every response is a fresh projection; nothing is cached.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::ApiResponse;
use shared::models::{
    ConsultaDisponibilidad, DisponibilidadCancha, DisponibilidadComplejo, DisponibilidadSlot,
    EstadisticasOcupacion, VerificacionRespuesta, VerificacionSlot,
};
use sporthub_client::FailurePolicy;

use crate::common::{AppResult, ok};
use crate::core::ServerState;

/// GET /api/disponibilidad - availability tree for a date range
pub async fn query(
    State(state): State<ServerState>,
    Query(consulta): Query<ConsultaDisponibilidad>,
) -> AppResult<Json<ApiResponse<DisponibilidadComplejo>>> {
    let disponibilidad = state.upstream.disponibilidad(&consulta).await?;
    Ok(ok(disponibilidad))
}

/// GET /api/disponibilidad/verificar - is this exact slot free?
///
/// Fail-closed: when the upstream cannot answer, the slot reads as
/// unavailable instead of erroring. A booking flow must never be told
/// "free" on uncertain state.
pub async fn verify(
    State(state): State<ServerState>,
    Query(verificacion): Query<VerificacionSlot>,
) -> AppResult<Json<ApiResponse<VerificacionRespuesta>>> {
    let disponible = state
        .upstream
        .verificar_slot(&verificacion, FailurePolicy::FailClosed)
        .await?;
    Ok(ok(VerificacionRespuesta { disponible }))
}

/// Date-range parameters for the single-court view
#[derive(Debug, Deserialize)]
pub struct RangoFechas {
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub solo_disponibles: Option<bool>,
}

/// GET /api/disponibilidad/cancha/{id} - availability of one court
pub async fn by_court(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(rango): Query<RangoFechas>,
) -> AppResult<Json<ApiResponse<DisponibilidadCancha>>> {
    let cancha = state
        .upstream
        .disponibilidad_cancha(
            id,
            &rango.fecha_inicio,
            &rango.fecha_fin,
            rango.solo_disponibles.unwrap_or(true),
        )
        .await?;
    Ok(ok(cancha))
}

/// Parameters for the single-day view
#[derive(Debug, Deserialize)]
pub struct ConsultaDia {
    pub id_complejo: i64,
    pub fecha: String,
}

/// GET /api/disponibilidad/dia - one day of a complex, occupied slots included
pub async fn by_day(
    State(state): State<ServerState>,
    Query(consulta): Query<ConsultaDia>,
) -> AppResult<Json<ApiResponse<DisponibilidadComplejo>>> {
    let disponibilidad = state
        .upstream
        .disponibilidad_dia(consulta.id_complejo, &consulta.fecha)
        .await?;
    Ok(ok(disponibilidad))
}

/// Parameters for the next-slots view
#[derive(Debug, Deserialize)]
pub struct ConsultaProximos {
    pub limite: Option<usize>,
}

/// GET /api/disponibilidad/proximos/{id_cancha} - next free slots of a court
pub async fn next_slots(
    State(state): State<ServerState>,
    Path(id_cancha): Path<i64>,
    Query(consulta): Query<ConsultaProximos>,
) -> AppResult<Json<ApiResponse<Vec<DisponibilidadSlot>>>> {
    let slots = state
        .upstream
        .proximos_slots(id_cancha, consulta.limite.unwrap_or(10))
        .await?;
    Ok(ok(slots))
}

/// Parameters for the occupancy view
#[derive(Debug, Deserialize)]
pub struct ConsultaOcupacion {
    pub id_complejo: i64,
    pub fecha_inicio: String,
    pub fecha_fin: String,
}

/// GET /api/disponibilidad/ocupacion - occupancy statistics for a complex
pub async fn occupancy(
    State(state): State<ServerState>,
    Query(consulta): Query<ConsultaOcupacion>,
) -> AppResult<Json<ApiResponse<EstadisticasOcupacion>>> {
    let resumen = state
        .upstream
        .estadisticas_ocupacion(
            consulta.id_complejo,
            &consulta.fecha_inicio,
            &consulta.fecha_fin,
        )
        .await?;
    Ok(ok(resumen))
}
