//! User API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use shared::{ApiResponse, Paginated};
use shared::models::{Usuario, UsuarioCreate, UsuarioListQuery, UsuarioUpdate};

use crate::common::{AppResult, ok};
use crate::core::ServerState;

/// GET /api/usuarios - list users
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<UsuarioListQuery>,
) -> AppResult<Json<ApiResponse<Paginated<Usuario>>>> {
    let usuarios = state.upstream.usuarios(&query).await?;
    Ok(ok(usuarios))
}

/// GET /api/usuarios/{id} - get one user
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Usuario>>> {
    let usuario = state.upstream.usuario(id).await?;
    Ok(ok(usuario))
}

/// POST /api/usuarios - create a user
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UsuarioCreate>,
) -> AppResult<Json<ApiResponse<Usuario>>> {
    payload.validate()?;
    let usuario = state.upstream.crear_usuario(&payload).await?;
    Ok(ok(usuario))
}

/// PUT /api/usuarios/{id} - replace a user
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<UsuarioUpdate>,
) -> AppResult<Json<ApiResponse<Usuario>>> {
    payload.validate()?;
    let usuario = state.upstream.actualizar_usuario(id, &payload).await?;
    Ok(ok(usuario))
}

/// DELETE /api/usuarios/{id} - delete a user
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<bool>>> {
    state.upstream.eliminar_usuario(id).await?;
    Ok(ok(true))
}

/// PATCH /api/usuarios/{id}/activar - activate an account
pub async fn activate(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Usuario>>> {
    let usuario = state.upstream.activar_usuario(id).await?;
    Ok(ok(usuario))
}

/// PATCH /api/usuarios/{id}/desactivar - deactivate an account
pub async fn deactivate(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Usuario>>> {
    let usuario = state.upstream.desactivar_usuario(id).await?;
    Ok(ok(usuario))
}

/// PATCH /api/usuarios/{id}/verificar - mark as verified
pub async fn verify(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Usuario>>> {
    let usuario = state.upstream.verificar_usuario(id).await?;
    Ok(ok(usuario))
}
