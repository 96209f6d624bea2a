//! Reservation API module

mod handler;

use axum::{Router, routing::get, routing::patch};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservas", reserva_routes())
}

fn reserva_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id).put(handler::update))
        .route("/{id}/cancelar", patch(handler::cancel))
        .route("/{id}/confirmar", patch(handler::confirm))
}
