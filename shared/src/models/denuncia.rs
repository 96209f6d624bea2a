//! Complaint (denuncia) model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Complaint lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DenunciaEstado {
    Pendiente,
    EnRevision,
    Resuelta,
    Rechazada,
}

/// Complaint entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Denuncia {
    pub id_denuncia: i64,
    pub id_usuario: i64,
    pub asunto: String,
    pub descripcion: String,
    pub estado: DenunciaEstado,
    /// Staff answer, once handled
    pub respuesta: Option<String>,
    pub fecha_creacion: String,
    pub fecha_actualizacion: String,
}

/// Create complaint payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DenunciaCreate {
    pub id_usuario: i64,
    #[validate(length(min = 1, message = "el asunto es requerido"))]
    pub asunto: String,
    #[validate(length(min = 1, message = "la descripcion es requerida"))]
    pub descripcion: String,
}

/// Update complaint payload (staff side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenunciaUpdate {
    pub estado: Option<DenunciaEstado>,
    pub respuesta: Option<String>,
}

/// List query for `GET /denuncias`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DenunciaListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_usuario: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<DenunciaEstado>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
