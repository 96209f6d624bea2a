//! Schedule API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use shared::ApiResponse;
use shared::models::{Horario, HorarioCreate, HorarioListQuery, HorarioUpdate};

use crate::common::{AppResult, ok};
use crate::core::ServerState;

/// GET /api/horarios - list schedule rows, in week order
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<HorarioListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Horario>>>> {
    let horarios = state.upstream.horarios(&query).await?;
    Ok(ok(horarios))
}

/// GET /api/horarios/{id} - get one schedule row
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Horario>>> {
    let horario = state.upstream.horario(id).await?;
    Ok(ok(horario))
}

/// POST /api/horarios - create a schedule row
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<HorarioCreate>,
) -> AppResult<Json<ApiResponse<Horario>>> {
    payload.validate()?;
    let horario = state.upstream.crear_horario(&payload).await?;
    Ok(ok(horario))
}

/// PUT /api/horarios/{id} - replace a schedule row
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<HorarioUpdate>,
) -> AppResult<Json<ApiResponse<Horario>>> {
    let horario = state.upstream.actualizar_horario(id, &payload).await?;
    Ok(ok(horario))
}

/// DELETE /api/horarios/{id} - delete a schedule row
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<bool>>> {
    state.upstream.eliminar_horario(id).await?;
    Ok(ok(true))
}
