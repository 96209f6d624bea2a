//! User (usuario) model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    pub id_usuario: i64,
    pub nombre: String,
    pub email: String,
    pub telefono: Option<String>,
    /// usuario | admin | super_admin
    pub rol: String,
    pub activo: bool,
    pub verificado: bool,
    pub fecha_creacion: String,
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UsuarioCreate {
    #[validate(length(min = 1, message = "el nombre es requerido"))]
    pub nombre: String,
    #[validate(email(message = "email invalido"))]
    pub email: String,
    pub telefono: Option<String>,
    pub rol: Option<String>,
}

/// Update user payload (partial)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UsuarioUpdate {
    #[validate(length(min = 1, message = "el nombre no puede estar vacio"))]
    pub nombre: Option<String>,
    #[validate(email(message = "email invalido"))]
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub rol: Option<String>,
}

/// List query for `GET /usuarios`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsuarioListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
