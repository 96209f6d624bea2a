//! Complaint API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use shared::ApiResponse;
use shared::models::{Denuncia, DenunciaCreate, DenunciaListQuery, DenunciaUpdate};

use crate::common::{AppResult, ok};
use crate::core::ServerState;

/// GET /api/denuncias - list complaints
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<DenunciaListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Denuncia>>>> {
    let denuncias = state.upstream.denuncias(&query).await?;
    Ok(ok(denuncias))
}

/// GET /api/denuncias/{id} - get one complaint
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Denuncia>>> {
    let denuncia = state.upstream.denuncia(id).await?;
    Ok(ok(denuncia))
}

/// POST /api/denuncias - file a complaint
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DenunciaCreate>,
) -> AppResult<Json<ApiResponse<Denuncia>>> {
    payload.validate()?;
    let denuncia = state.upstream.crear_denuncia(&payload).await?;
    Ok(ok(denuncia))
}

/// PUT /api/denuncias/{id} - update state or answer
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DenunciaUpdate>,
) -> AppResult<Json<ApiResponse<Denuncia>>> {
    let denuncia = state.upstream.actualizar_denuncia(id, &payload).await?;
    Ok(ok(denuncia))
}
