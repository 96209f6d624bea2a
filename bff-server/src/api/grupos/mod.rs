//! Group API module

mod handler;

use axum::{
    Router,
    routing::{get, patch, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/grupos", grupo_routes())
}

fn grupo_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route(
            "/{id}/miembros",
            get(handler::list_members).post(handler::add_member),
        )
        .route(
            "/{id}/miembros/{id_miembro}",
            put(handler::update_member).delete(handler::remove_member),
        )
        .route("/{id}/transferir-owner", patch(handler::transfer_owner))
}
