//! Group API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use shared::ApiResponse;
use shared::models::{
    Grupo, GrupoCreate, GrupoListQuery, GrupoUpdate, Miembro, MiembroCreate, MiembroUpdate,
    TransferenciaOwner,
};

use crate::common::{AppResult, ok};
use crate::core::ServerState;

/// GET /api/grupos - list groups
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<GrupoListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Grupo>>>> {
    let grupos = state.upstream.grupos(&query).await?;
    Ok(ok(grupos))
}

/// GET /api/grupos/{id} - get one group
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Grupo>>> {
    let grupo = state.upstream.grupo(id).await?;
    Ok(ok(grupo))
}

/// POST /api/grupos - create a group
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<GrupoCreate>,
) -> AppResult<Json<ApiResponse<Grupo>>> {
    payload.validate()?;
    let grupo = state.upstream.crear_grupo(&payload).await?;
    Ok(ok(grupo))
}

/// PUT /api/grupos/{id} - replace a group
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<GrupoUpdate>,
) -> AppResult<Json<ApiResponse<Grupo>>> {
    payload.validate()?;
    let grupo = state.upstream.actualizar_grupo(id, &payload).await?;
    Ok(ok(grupo))
}

/// DELETE /api/grupos/{id} - delete a group
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<bool>>> {
    state.upstream.eliminar_grupo(id).await?;
    Ok(ok(true))
}

/// GET /api/grupos/{id}/miembros - list group members
pub async fn list_members(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<Miembro>>>> {
    let miembros = state.upstream.miembros(id).await?;
    Ok(ok(miembros))
}

/// POST /api/grupos/{id}/miembros - add a member
pub async fn add_member(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<MiembroCreate>,
) -> AppResult<Json<ApiResponse<Miembro>>> {
    let miembro = state.upstream.agregar_miembro(id, &payload).await?;
    Ok(ok(miembro))
}

/// PUT /api/grupos/{id}/miembros/{id_miembro} - update a member's role
pub async fn update_member(
    State(state): State<ServerState>,
    Path((id, id_miembro)): Path<(i64, i64)>,
    Json(payload): Json<MiembroUpdate>,
) -> AppResult<Json<ApiResponse<Miembro>>> {
    let miembro = state
        .upstream
        .actualizar_miembro(id, id_miembro, &payload)
        .await?;
    Ok(ok(miembro))
}

/// DELETE /api/grupos/{id}/miembros/{id_miembro} - remove a member
pub async fn remove_member(
    State(state): State<ServerState>,
    Path((id, id_miembro)): Path<(i64, i64)>,
) -> AppResult<Json<ApiResponse<bool>>> {
    state.upstream.eliminar_miembro(id, id_miembro).await?;
    Ok(ok(true))
}

/// PATCH /api/grupos/{id}/transferir-owner - transfer ownership
pub async fn transfer_owner(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<TransferenciaOwner>,
) -> AppResult<Json<ApiResponse<Grupo>>> {
    let grupo = state.upstream.transferir_owner(id, &payload).await?;
    Ok(ok(grupo))
}
