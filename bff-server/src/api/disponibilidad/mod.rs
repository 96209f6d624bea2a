//! Availability API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/disponibilidad", disponibilidad_routes())
}

fn disponibilidad_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::query))
        .route("/verificar", get(handler::verify))
        .route("/cancha/{id}", get(handler::by_court))
        .route("/dia", get(handler::by_day))
        .route("/proximos/{id_cancha}", get(handler::next_slots))
        .route("/ocupacion", get(handler::occupancy))
}
