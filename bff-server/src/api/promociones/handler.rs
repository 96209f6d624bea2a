//! Promotion API handlers
//!
//! CRUD passthrough plus evaluation. Evaluation fetches the promotion
//! and applies the discount rules locally, so the answer stays in sync
//! with whatever the upstream currently stores.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use shared::ApiResponse;
use shared::models::{
    PromoEvalRequest, PromoEvalResponse, Promocion, PromocionCreate, PromocionListQuery,
    PromocionUpdate, evaluar_promocion,
};

use crate::common::{AppResult, ok};
use crate::core::ServerState;

/// GET /api/promociones - list promotions
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PromocionListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Promocion>>>> {
    let promociones = state.upstream.promociones(&query).await?;
    Ok(ok(promociones))
}

/// GET /api/promociones/{id} - get one promotion
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Promocion>>> {
    let promocion = state.upstream.promocion(id).await?;
    Ok(ok(promocion))
}

/// POST /api/promociones - create a promotion
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PromocionCreate>,
) -> AppResult<Json<ApiResponse<Promocion>>> {
    payload.validate()?;
    let promocion = state.upstream.crear_promocion(&payload).await?;
    Ok(ok(promocion))
}

/// PUT /api/promociones/{id} - replace a promotion
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PromocionUpdate>,
) -> AppResult<Json<ApiResponse<Promocion>>> {
    let promocion = state.upstream.actualizar_promocion(id, &payload).await?;
    Ok(ok(promocion))
}

/// DELETE /api/promociones/{id} - delete a promotion
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<bool>>> {
    state.upstream.eliminar_promocion(id).await?;
    Ok(ok(true))
}

/// PATCH /api/promociones/{id}/activar - activate
pub async fn activate(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Promocion>>> {
    let promocion = state.upstream.activar_promocion(id).await?;
    Ok(ok(promocion))
}

/// PATCH /api/promociones/{id}/desactivar - deactivate
pub async fn deactivate(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Promocion>>> {
    let promocion = state.upstream.desactivar_promocion(id).await?;
    Ok(ok(promocion))
}

/// POST /api/promociones/evaluar - evaluate a promotion against a price
pub async fn evaluate(
    State(state): State<ServerState>,
    Json(payload): Json<PromoEvalRequest>,
) -> AppResult<Json<ApiResponse<PromoEvalResponse>>> {
    let promocion = state.upstream.promocion(payload.id_promocion).await?;
    Ok(ok(evaluar_promocion(&promocion, &payload)))
}
