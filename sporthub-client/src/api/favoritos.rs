//! Favorite API

use shared::models::{
    ConteoFavoritos, EsFavorito, Favorito, FavoritoClave, FavoritoCreate, FavoritoListQuery,
};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List favorites with optional filters
    pub async fn favoritos(&self, query: &FavoritoListQuery) -> ClientResult<Vec<Favorito>> {
        self.get_query("/favoritos", query).await
    }

    /// Get a single favorite
    pub async fn favorito(&self, id: i64) -> ClientResult<Favorito> {
        self.get(&format!("/favoritos/{}", id)).await
    }

    /// Create a favorite
    pub async fn crear_favorito(&self, payload: &FavoritoCreate) -> ClientResult<Favorito> {
        self.post("/favoritos", payload).await
    }

    /// Delete a favorite by id
    pub async fn eliminar_favorito(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/favoritos/{}", id)).await
    }

    /// Delete a favorite by its natural key (user + complex/court)
    pub async fn eliminar_favorito_por_clave(&self, clave: &FavoritoClave) -> ClientResult<()> {
        self.delete_query("/favoritos", clave).await
    }

    /// Whether the given key is already a favorite
    pub async fn es_favorito(&self, clave: &FavoritoClave) -> ClientResult<EsFavorito> {
        self.get_query("/favoritos/es-favorito", clave).await
    }

    /// How many favorites a user has
    pub async fn contar_favoritos(&self, id_usuario: i64) -> ClientResult<ConteoFavoritos> {
        self.get_query("/favoritos/count", &[("id_usuario", id_usuario)])
            .await
    }
}
