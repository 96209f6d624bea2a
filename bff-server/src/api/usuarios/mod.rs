//! User API module

mod handler;

use axum::{Router, routing::get, routing::patch};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/usuarios", usuario_routes())
}

fn usuario_routes() -> Router<ServerState> {
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
        .route("/{id}/verificar", patch(handler::verify))
}
