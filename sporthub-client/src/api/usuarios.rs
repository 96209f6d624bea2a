//! User API

use shared::Paginated;
use shared::models::{Usuario, UsuarioCreate, UsuarioListQuery, UsuarioUpdate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List users with optional filters
    pub async fn usuarios(&self, query: &UsuarioListQuery) -> ClientResult<Paginated<Usuario>> {
        self.get_query("/usuarios", query).await
    }

    /// Get a single user
    pub async fn usuario(&self, id: i64) -> ClientResult<Usuario> {
        self.get(&format!("/usuarios/{}", id)).await
    }

    /// Create a user
    pub async fn crear_usuario(&self, payload: &UsuarioCreate) -> ClientResult<Usuario> {
        self.post("/usuarios", payload).await
    }

    /// Replace a user
    pub async fn actualizar_usuario(
        &self,
        id: i64,
        payload: &UsuarioUpdate,
    ) -> ClientResult<Usuario> {
        self.put(&format!("/usuarios/{}", id), payload).await
    }

    /// Delete a user
    pub async fn eliminar_usuario(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/usuarios/{}", id)).await
    }

    /// Activate a user account
    pub async fn activar_usuario(&self, id: i64) -> ClientResult<Usuario> {
        self.patch_empty(&format!("/usuarios/{}/activar", id)).await
    }

    /// Deactivate a user account
    pub async fn desactivar_usuario(&self, id: i64) -> ClientResult<Usuario> {
        self.patch_empty(&format!("/usuarios/{}/desactivar", id))
            .await
    }

    /// Mark a user as verified
    pub async fn verificar_usuario(&self, id: i64) -> ClientResult<Usuario> {
        self.patch_empty(&format!("/usuarios/{}/verificar", id))
            .await
    }
}
