//! Complaint API

use shared::models::{Denuncia, DenunciaCreate, DenunciaListQuery, DenunciaUpdate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List complaints with optional filters
    pub async fn denuncias(&self, query: &DenunciaListQuery) -> ClientResult<Vec<Denuncia>> {
        self.get_query("/denuncias", query).await
    }

    /// Get a single complaint
    pub async fn denuncia(&self, id: i64) -> ClientResult<Denuncia> {
        self.get(&format!("/denuncias/{}", id)).await
    }

    /// File a complaint
    pub async fn crear_denuncia(&self, payload: &DenunciaCreate) -> ClientResult<Denuncia> {
        self.post("/denuncias", payload).await
    }

    /// Update a complaint's state or answer
    pub async fn actualizar_denuncia(
        &self,
        id: i64,
        payload: &DenunciaUpdate,
    ) -> ClientResult<Denuncia> {
        self.put(&format!("/denuncias/{}", id), payload).await
    }
}
