//! Court API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use shared::{ApiResponse, Paginated};
use shared::models::{Cancha, CanchaListQuery, Horario};

use crate::common::{AppResult, ok};
use crate::core::ServerState;

/// GET /api/canchas - list courts
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<CanchaListQuery>,
) -> AppResult<Json<ApiResponse<Paginated<Cancha>>>> {
    let canchas = state.upstream.canchas(&query).await?;
    Ok(ok(canchas))
}

/// GET /api/canchas/{id} - get one court
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Cancha>>> {
    let cancha = state.upstream.cancha(id).await?;
    Ok(ok(cancha))
}

/// GET /api/canchas/{id}/horarios - weekly schedule of a court
pub async fn list_horarios(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<Horario>>>> {
    let horarios = state.upstream.horarios_de_cancha(id).await?;
    Ok(ok(horarios))
}
