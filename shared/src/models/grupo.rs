//! Group (grupo) model
//!
//! Player groups that book together. The owner is a member with the
//! `owner` role; ownership can be transferred but never dropped.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Group entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grupo {
    pub id_grupo: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub id_owner: i64,
    pub fecha_creacion: String,
}

/// Create group payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GrupoCreate {
    #[validate(length(min = 1, message = "el nombre del grupo es requerido"))]
    pub nombre: String,
    pub descripcion: Option<String>,
    pub id_owner: i64,
}

/// Update group payload (partial)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GrupoUpdate {
    #[validate(length(min = 1, message = "el nombre del grupo no puede estar vacio"))]
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
}

/// Group membership row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Miembro {
    pub id_miembro: i64,
    pub id_grupo: i64,
    pub id_usuario: i64,
    pub rol: String,
    pub fecha_ingreso: String,
}

/// Add member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiembroCreate {
    pub id_usuario: i64,
    pub rol: Option<String>,
}

/// Update member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiembroUpdate {
    pub rol: String,
}

/// Payload for `PATCH /grupos/{id}/transferir-owner`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferenciaOwner {
    pub id_usuario: i64,
}

/// List query for `GET /grupos`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrupoListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_usuario: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
