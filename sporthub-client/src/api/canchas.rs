//! Court API

use shared::Paginated;
use shared::models::{Cancha, CanchaListQuery};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List courts with optional filters
    pub async fn canchas(&self, query: &CanchaListQuery) -> ClientResult<Paginated<Cancha>> {
        self.get_query("/canchas", query).await
    }

    /// Get a single court
    pub async fn cancha(&self, id: i64) -> ClientResult<Cancha> {
        self.get(&format!("/canchas/{}", id)).await
    }
}
