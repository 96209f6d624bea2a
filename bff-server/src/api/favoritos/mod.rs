//! Favorite API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/favoritos", favorito_routes())
}

fn favorito_routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            get(handler::list)
                .post(handler::create)
                .delete(handler::delete_by_key),
        )
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
        .route("/es-favorito", get(handler::is_favorite))
        .route("/count", get(handler::count))
}
