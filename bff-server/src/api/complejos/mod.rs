//! Complex API module

mod handler;

use axum::{Router, routing::get, routing::patch};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/complejos", complejo_routes())
}

fn complejo_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/estado", patch(handler::change_state))
        .route("/{id}/canchas", get(handler::list_canchas))
        .route("/{id}/horarios", get(handler::list_horarios))
        .route("/{id}/bloqueos", get(handler::list_bloqueos))
        .route("/{id}/resumen", get(handler::resumen))
        .route("/{id}/detalle", get(handler::detalle))
}
