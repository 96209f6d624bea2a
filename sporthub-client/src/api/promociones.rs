//! Promotion API

use shared::models::{
    PromoEvalRequest, PromoEvalResponse, Promocion, PromocionCreate, PromocionListQuery,
    PromocionUpdate,
};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List promotions with optional filters
    pub async fn promociones(&self, query: &PromocionListQuery) -> ClientResult<Vec<Promocion>> {
        self.get_query("/promociones", query).await
    }

    /// Get a single promotion
    pub async fn promocion(&self, id: i64) -> ClientResult<Promocion> {
        self.get(&format!("/promociones/{}", id)).await
    }

    /// Create a promotion
    pub async fn crear_promocion(&self, payload: &PromocionCreate) -> ClientResult<Promocion> {
        self.post("/promociones", payload).await
    }

    /// Replace a promotion
    pub async fn actualizar_promocion(
        &self,
        id: i64,
        payload: &PromocionUpdate,
    ) -> ClientResult<Promocion> {
        self.put(&format!("/promociones/{}", id), payload).await
    }

    /// Delete a promotion
    pub async fn eliminar_promocion(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/promociones/{}", id)).await
    }

    /// Activate a promotion
    pub async fn activar_promocion(&self, id: i64) -> ClientResult<Promocion> {
        self.patch_empty(&format!("/promociones/{}/activar", id))
            .await
    }

    /// Deactivate a promotion
    pub async fn desactivar_promocion(&self, id: i64) -> ClientResult<Promocion> {
        self.patch_empty(&format!("/promociones/{}/desactivar", id))
            .await
    }

    /// Evaluate a promotion against a base price, upstream-side
    pub async fn evaluar_promocion(
        &self,
        payload: &PromoEvalRequest,
    ) -> ClientResult<PromoEvalResponse> {
        self.post("/promociones/evaluar", payload).await
    }
}
