//! Group API

use shared::models::{
    Grupo, GrupoCreate, GrupoListQuery, GrupoUpdate, Miembro, MiembroCreate, MiembroUpdate,
    TransferenciaOwner,
};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List groups with optional filters
    pub async fn grupos(&self, query: &GrupoListQuery) -> ClientResult<Vec<Grupo>> {
        self.get_query("/grupos", query).await
    }

    /// Get a single group
    pub async fn grupo(&self, id: i64) -> ClientResult<Grupo> {
        self.get(&format!("/grupos/{}", id)).await
    }

    /// Create a group
    pub async fn crear_grupo(&self, payload: &GrupoCreate) -> ClientResult<Grupo> {
        self.post("/grupos", payload).await
    }

    /// Replace a group
    pub async fn actualizar_grupo(&self, id: i64, payload: &GrupoUpdate) -> ClientResult<Grupo> {
        self.put(&format!("/grupos/{}", id), payload).await
    }

    /// Delete a group
    pub async fn eliminar_grupo(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/grupos/{}", id)).await
    }

    /// List the members of a group
    pub async fn miembros(&self, id_grupo: i64) -> ClientResult<Vec<Miembro>> {
        self.get(&format!("/grupos/{}/miembros", id_grupo)).await
    }

    /// Add a member to a group
    pub async fn agregar_miembro(
        &self,
        id_grupo: i64,
        payload: &MiembroCreate,
    ) -> ClientResult<Miembro> {
        self.post(&format!("/grupos/{}/miembros", id_grupo), payload)
            .await
    }

    /// Update a member's role
    pub async fn actualizar_miembro(
        &self,
        id_grupo: i64,
        id_miembro: i64,
        payload: &MiembroUpdate,
    ) -> ClientResult<Miembro> {
        self.put(
            &format!("/grupos/{}/miembros/{}", id_grupo, id_miembro),
            payload,
        )
        .await
    }

    /// Remove a member from a group
    pub async fn eliminar_miembro(&self, id_grupo: i64, id_miembro: i64) -> ClientResult<()> {
        self.delete(&format!("/grupos/{}/miembros/{}", id_grupo, id_miembro))
            .await
    }

    /// Transfer group ownership to another member
    pub async fn transferir_owner(
        &self,
        id_grupo: i64,
        payload: &TransferenciaOwner,
    ) -> ClientResult<Grupo> {
        self.patch(&format!("/grupos/{}/transferir-owner", id_grupo), payload)
            .await
    }
}
