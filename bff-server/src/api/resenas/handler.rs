//! Review API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use shared::ApiResponse;
use shared::models::{Resena, ResenaCreate, ResenaListQuery, ResenaUpdate, ReporteResena};

use crate::common::{AppResult, ok};
use crate::core::ServerState;

/// GET /api/resenas - list reviews
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ResenaListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Resena>>>> {
    let resenas = state.upstream.resenas(&query).await?;
    Ok(ok(resenas))
}

/// GET /api/resenas/{id} - get one review
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Resena>>> {
    let resena = state.upstream.resena(id).await?;
    Ok(ok(resena))
}

/// POST /api/resenas - create a review
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ResenaCreate>,
) -> AppResult<Json<ApiResponse<Resena>>> {
    payload.validate()?;
    let resena = state.upstream.crear_resena(&payload).await?;
    Ok(ok(resena))
}

/// PATCH /api/resenas/{id} - update a review
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ResenaUpdate>,
) -> AppResult<Json<ApiResponse<Resena>>> {
    payload.validate()?;
    let resena = state.upstream.actualizar_resena(id, &payload).await?;
    Ok(ok(resena))
}

/// DELETE /api/resenas/{id} - delete a review
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<bool>>> {
    state.upstream.eliminar_resena(id).await?;
    Ok(ok(true))
}

/// POST /api/resenas/{id}/reportar - report a review for moderation
pub async fn report(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReporteResena>,
) -> AppResult<Json<ApiResponse<Resena>>> {
    payload.validate()?;
    let resena = state.upstream.reportar_resena(id, &payload).await?;
    Ok(ok(resena))
}
