//! Court (cancha) model

use serde::{Deserialize, Serialize};

/// Court entity: a single bookable playing surface within a complex
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cancha {
    pub id_cancha: i64,
    pub id_complejo: i64,
    pub nombre: String,
    pub deporte: String,
    pub superficie: Option<String>,
    #[serde(default)]
    pub techada: bool,
    pub precio_hora: Option<f64>,
    pub activo: bool,
}

/// List query for `GET /canchas`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CanchaListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_complejo: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deporte: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
