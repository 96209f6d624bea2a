//! Complex API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use validator::Validate;

use shared::{ApiResponse, Paginated};
use shared::models::{
    BloqueoTemporal, CambioEstadoComplejo, Cancha, Complejo, ComplejoCreate, ComplejoDetalle,
    ComplejoListQuery, ComplejoUpdate, Horario, ResumenComplejo,
};

use crate::common::{AppResult, ok};
use crate::core::ServerState;

/// GET /api/complejos - list complexes
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ComplejoListQuery>,
) -> AppResult<Json<ApiResponse<Paginated<Complejo>>>> {
    let complejos = state.upstream.complejos(&query).await?;
    Ok(ok(complejos))
}

/// GET /api/complejos/{id} - get one complex
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Complejo>>> {
    let complejo = state.upstream.complejo(id).await?;
    Ok(ok(complejo))
}

/// POST /api/complejos - create a complex
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ComplejoCreate>,
) -> AppResult<Json<ApiResponse<Complejo>>> {
    payload.validate()?;
    let complejo = state.upstream.crear_complejo(&payload).await?;
    Ok(ok(complejo))
}

/// PATCH /api/complejos/{id} - update a complex
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ComplejoUpdate>,
) -> AppResult<Json<ApiResponse<Complejo>>> {
    payload.validate()?;
    let complejo = state.upstream.actualizar_complejo(id, &payload).await?;
    Ok(ok(complejo))
}

/// DELETE /api/complejos/{id} - delete a complex
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<bool>>> {
    state.upstream.eliminar_complejo(id).await?;
    Ok(ok(true))
}

/// PATCH /api/complejos/{id}/estado - activate or deactivate
pub async fn change_state(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CambioEstadoComplejo>,
) -> AppResult<Json<ApiResponse<Complejo>>> {
    let complejo = state
        .upstream
        .cambiar_estado_complejo(id, &payload)
        .await?;
    Ok(ok(complejo))
}

/// GET /api/complejos/{id}/canchas - courts of a complex
pub async fn list_canchas(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<Cancha>>>> {
    let canchas = state.upstream.canchas_de_complejo(id).await?;
    Ok(ok(canchas))
}

/// GET /api/complejos/{id}/horarios - weekly schedule, in week order
pub async fn list_horarios(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<Horario>>>> {
    let horarios = state.upstream.horarios_de_complejo(id).await?;
    Ok(ok(horarios))
}

/// Filter for the blocks listing
#[derive(Debug, Deserialize)]
pub struct FiltroBloqueos {
    /// `true` keeps only active, not-yet-expired blocks
    pub activos: Option<bool>,
}

/// GET /api/complejos/{id}/bloqueos - temporary blocks
pub async fn list_bloqueos(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(filtro): Query<FiltroBloqueos>,
) -> AppResult<Json<ApiResponse<Vec<BloqueoTemporal>>>> {
    let bloqueos = if filtro.activos.unwrap_or(false) {
        state.upstream.bloqueos_activos(id).await?
    } else {
        state.upstream.bloqueos_de_complejo(id).await?
    };
    Ok(ok(bloqueos))
}

/// GET /api/complejos/{id}/resumen - upstream-computed occupancy summary
pub async fn resumen(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<ResumenComplejo>>> {
    let resumen = state.upstream.resumen_complejo(id).await?;
    Ok(ok(resumen))
}

/// GET /api/complejos/{id}/detalle - aggregated detail view
///
/// Best effort: courts, schedules and blocks may come back empty when
/// their upstream fetch failed; only the complex info is required.
pub async fn detalle(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<ComplejoDetalle>>> {
    let detalle = state.upstream.detalle_complejo(id).await?;
    Ok(ok(detalle))
}
