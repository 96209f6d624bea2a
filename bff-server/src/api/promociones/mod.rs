//! Promotion API module

mod handler;

use axum::{Router, routing::get, routing::patch, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/promociones", promocion_routes())
}

fn promocion_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/activar", patch(handler::activate))
        .route("/{id}/desactivar", patch(handler::deactivate))
        .route("/evaluar", post(handler::evaluate))
}
