//! Complex API
//!
//! CRUD wrappers plus the aggregated detail view. The detail join is
//! best effort: the complex itself must load, the secondary lists
//! degrade to empty on failure.

use chrono::Local;

use shared::Paginated;
use shared::models::{
    BloqueoTemporal, CambioEstadoComplejo, Cancha, Complejo, ComplejoCreate, ComplejoDetalle,
    ComplejoListQuery, ComplejoUpdate, Horario, ResumenComplejo,
};

use crate::api::horarios::ordenar_horarios;
use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List complexes with optional filters
    pub async fn complejos(&self, query: &ComplejoListQuery) -> ClientResult<Paginated<Complejo>> {
        self.get_query("/complejos", query).await
    }

    /// Get a single complex
    pub async fn complejo(&self, id: i64) -> ClientResult<Complejo> {
        self.get(&format!("/complejos/{}", id)).await
    }

    /// Create a complex
    pub async fn crear_complejo(&self, payload: &ComplejoCreate) -> ClientResult<Complejo> {
        self.post("/complejos", payload).await
    }

    /// Partially update a complex
    pub async fn actualizar_complejo(
        &self,
        id: i64,
        payload: &ComplejoUpdate,
    ) -> ClientResult<Complejo> {
        self.patch(&format!("/complejos/{}", id), payload).await
    }

    /// Delete a complex
    pub async fn eliminar_complejo(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/complejos/{}", id)).await
    }

    /// Activate or deactivate a complex
    pub async fn cambiar_estado_complejo(
        &self,
        id: i64,
        payload: &CambioEstadoComplejo,
    ) -> ClientResult<Complejo> {
        self.patch(&format!("/complejos/{}/estado", id), payload)
            .await
    }

    /// Courts of a complex
    pub async fn canchas_de_complejo(&self, id: i64) -> ClientResult<Vec<Cancha>> {
        self.get(&format!("/complejos/{}/canchas", id)).await
    }

    /// Weekly schedule of a complex, in week order
    pub async fn horarios_de_complejo(&self, id: i64) -> ClientResult<Vec<Horario>> {
        let mut horarios: Vec<Horario> = self.get(&format!("/complejos/{}/horarios", id)).await?;
        ordenar_horarios(&mut horarios);
        Ok(horarios)
    }

    /// Temporary blocks of a complex, as the upstream reports them
    pub async fn bloqueos_de_complejo(&self, id: i64) -> ClientResult<Vec<BloqueoTemporal>> {
        self.get(&format!("/complejos/{}/bloqueos", id)).await
    }

    /// Active blocks of a complex: still open-ended as of today, sorted
    /// by start date
    pub async fn bloqueos_activos(&self, id: i64) -> ClientResult<Vec<BloqueoTemporal>> {
        let hoy = Local::now().date_naive().format("%Y-%m-%d").to_string();
        let mut bloqueos = self.bloqueos_de_complejo(id).await?;
        // ISO dates, lexicographic comparison is calendar comparison
        bloqueos.retain(|b| b.activo && b.fecha_fin.as_str() >= hoy.as_str());
        bloqueos.sort_by(|a, b| a.fecha_inicio.cmp(&b.fecha_inicio));
        Ok(bloqueos)
    }

    /// Upstream-computed occupancy summary for a complex
    pub async fn resumen_complejo(&self, id: i64) -> ClientResult<ResumenComplejo> {
        self.get(&format!("/complejos/{}/resumen", id)).await
    }

    /// Aggregated detail: info, courts, schedules and blocks in one call.
    ///
    /// The four upstream requests run concurrently. The complex info is
    /// required; each secondary list degrades to empty when its fetch
    /// fails, with a warning, so one flaky endpoint does not take the
    /// whole view down.
    pub async fn detalle_complejo(&self, id: i64) -> ClientResult<ComplejoDetalle> {
        let (complejo, canchas, horarios, bloqueos) = tokio::join!(
            self.complejo(id),
            self.canchas_de_complejo(id),
            self.horarios_de_complejo(id),
            self.bloqueos_de_complejo(id),
        );

        let complejo = complejo?;

        Ok(ComplejoDetalle {
            complejo,
            canchas: canchas.unwrap_or_else(|err| {
                tracing::warn!(id_complejo = id, error = %err, "courts fetch degraded to empty");
                Vec::new()
            }),
            horarios: horarios.unwrap_or_else(|err| {
                tracing::warn!(id_complejo = id, error = %err, "schedule fetch degraded to empty");
                Vec::new()
            }),
            bloqueos: bloqueos.unwrap_or_else(|err| {
                tracing::warn!(id_complejo = id, error = %err, "blocks fetch degraded to empty");
                Vec::new()
            }),
        })
    }
}
