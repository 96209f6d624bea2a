//! Review API

use shared::models::{Resena, ResenaCreate, ResenaListQuery, ResenaUpdate, ReporteResena};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List reviews with optional filters
    pub async fn resenas(&self, query: &ResenaListQuery) -> ClientResult<Vec<Resena>> {
        self.get_query("/resenas", query).await
    }

    /// Get a single review
    pub async fn resena(&self, id: i64) -> ClientResult<Resena> {
        self.get(&format!("/resenas/{}", id)).await
    }

    /// Create a review
    pub async fn crear_resena(&self, payload: &ResenaCreate) -> ClientResult<Resena> {
        self.post("/resenas", payload).await
    }

    /// Partially update a review
    pub async fn actualizar_resena(
        &self,
        id: i64,
        payload: &ResenaUpdate,
    ) -> ClientResult<Resena> {
        self.patch(&format!("/resenas/{}", id), payload).await
    }

    /// Delete a review
    pub async fn eliminar_resena(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/resenas/{}", id)).await
    }

    /// Report a review for moderation
    pub async fn reportar_resena(
        &self,
        id: i64,
        payload: &ReporteResena,
    ) -> ClientResult<Resena> {
        self.post(&format!("/resenas/{}/reportar", id), payload)
            .await
    }
}
