//! Reservation API

use shared::Paginated;
use shared::models::{
    CancelacionReserva, Reserva, ReservaCreate, ReservaListQuery, ReservaUpdate,
};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List reservations with optional filters
    pub async fn reservas(&self, query: &ReservaListQuery) -> ClientResult<Paginated<Reserva>> {
        self.get_query("/reservas", query).await
    }

    /// Get a single reservation
    pub async fn reserva(&self, id: i64) -> ClientResult<Reserva> {
        self.get(&format!("/reservas/{}", id)).await
    }

    /// Create a reservation
    pub async fn crear_reserva(&self, payload: &ReservaCreate) -> ClientResult<Reserva> {
        self.post("/reservas", payload).await
    }

    /// Update a reservation's schedule or notes
    pub async fn actualizar_reserva(
        &self,
        id: i64,
        payload: &ReservaUpdate,
    ) -> ClientResult<Reserva> {
        self.put(&format!("/reservas/{}", id), payload).await
    }

    /// Cancel a reservation, optionally with a reason
    pub async fn cancelar_reserva(
        &self,
        id: i64,
        payload: &CancelacionReserva,
    ) -> ClientResult<Reserva> {
        self.patch(&format!("/reservas/{}/cancelar", id), payload)
            .await
    }

    /// Confirm a pending reservation
    pub async fn confirmar_reserva(&self, id: i64) -> ClientResult<Reserva> {
        self.patch_empty(&format!("/reservas/{}/confirmar", id))
            .await
    }
}
