//! Favorite API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::ApiResponse;
use shared::models::{
    ConteoFavoritos, EsFavorito, Favorito, FavoritoClave, FavoritoCreate, FavoritoListQuery,
};

use crate::common::{AppResult, ok};
use crate::core::ServerState;

/// GET /api/favoritos - list favorites
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<FavoritoListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Favorito>>>> {
    let favoritos = state.upstream.favoritos(&query).await?;
    Ok(ok(favoritos))
}

/// GET /api/favoritos/{id} - get one favorite
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Favorito>>> {
    let favorito = state.upstream.favorito(id).await?;
    Ok(ok(favorito))
}

/// POST /api/favoritos - create a favorite
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<FavoritoCreate>,
) -> AppResult<Json<ApiResponse<Favorito>>> {
    let favorito = state.upstream.crear_favorito(&payload).await?;
    Ok(ok(favorito))
}

/// DELETE /api/favoritos/{id} - delete a favorite by id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<bool>>> {
    state.upstream.eliminar_favorito(id).await?;
    Ok(ok(true))
}

/// DELETE /api/favoritos - delete a favorite by its natural key
pub async fn delete_by_key(
    State(state): State<ServerState>,
    Query(clave): Query<FavoritoClave>,
) -> AppResult<Json<ApiResponse<bool>>> {
    state.upstream.eliminar_favorito_por_clave(&clave).await?;
    Ok(ok(true))
}

/// GET /api/favoritos/es-favorito - existence check by natural key
pub async fn is_favorite(
    State(state): State<ServerState>,
    Query(clave): Query<FavoritoClave>,
) -> AppResult<Json<ApiResponse<EsFavorito>>> {
    let respuesta = state.upstream.es_favorito(&clave).await?;
    Ok(ok(respuesta))
}

/// Parameters for the favorite count
#[derive(Debug, Deserialize)]
pub struct ConsultaConteo {
    pub id_usuario: i64,
}

/// GET /api/favoritos/count - favorites of a user
pub async fn count(
    State(state): State<ServerState>,
    Query(consulta): Query<ConsultaConteo>,
) -> AppResult<Json<ApiResponse<ConteoFavoritos>>> {
    let conteo = state.upstream.contar_favoritos(consulta.id_usuario).await?;
    Ok(ok(conteo))
}
