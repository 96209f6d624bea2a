//! Reservation API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use shared::{ApiResponse, Paginated};
use shared::models::{
    CancelacionReserva, Reserva, ReservaCreate, ReservaListQuery, ReservaUpdate,
};

use crate::common::{AppResult, ok};
use crate::core::ServerState;

/// GET /api/reservas - list reservations
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ReservaListQuery>,
) -> AppResult<Json<ApiResponse<Paginated<Reserva>>>> {
    let reservas = state.upstream.reservas(&query).await?;
    Ok(ok(reservas))
}

/// GET /api/reservas/{id} - get one reservation
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Reserva>>> {
    let reserva = state.upstream.reserva(id).await?;
    Ok(ok(reserva))
}

/// POST /api/reservas - create a reservation
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservaCreate>,
) -> AppResult<Json<ApiResponse<Reserva>>> {
    payload.validate()?;
    let reserva = state.upstream.crear_reserva(&payload).await?;
    Ok(ok(reserva))
}

/// PUT /api/reservas/{id} - update schedule or notes
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReservaUpdate>,
) -> AppResult<Json<ApiResponse<Reserva>>> {
    let reserva = state.upstream.actualizar_reserva(id, &payload).await?;
    Ok(ok(reserva))
}

/// PATCH /api/reservas/{id}/cancelar - cancel a reservation
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    payload: Option<Json<CancelacionReserva>>,
) -> AppResult<Json<ApiResponse<Reserva>>> {
    let cancelacion = payload.map(|Json(c)| c).unwrap_or_default();
    let reserva = state.upstream.cancelar_reserva(id, &cancelacion).await?;
    Ok(ok(reserva))
}

/// PATCH /api/reservas/{id}/confirmar - confirm a pending reservation
pub async fn confirm(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Reserva>>> {
    let reserva = state.upstream.confirmar_reserva(id).await?;
    Ok(ok(reserva))
}
