//! Favorite (favorito) model

use serde::{Deserialize, Serialize};

/// A user's bookmarked complex or court
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Favorito {
    pub id_favorito: i64,
    pub id_usuario: i64,
    pub id_complejo: Option<i64>,
    pub id_cancha: Option<i64>,
    pub fecha_creacion: String,
}

/// Create favorite payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritoCreate {
    pub id_usuario: i64,
    pub id_complejo: Option<i64>,
    pub id_cancha: Option<i64>,
}

/// Natural key of a favorite, for delete-by-key and existence checks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavoritoClave {
    pub id_usuario: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_complejo: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_cancha: Option<i64>,
}

/// Answer to `GET /favoritos/es-favorito`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsFavorito {
    pub es_favorito: bool,
}

/// Answer to `GET /favoritos/count`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConteoFavoritos {
    pub total: u64,
}

/// List query for `GET /favoritos`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavoritoListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_usuario: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
