//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`disponibilidad`] - availability queries and occupancy
//! - [`complejos`] - complex management and detail aggregation
//! - [`canchas`] - courts
//! - [`reservas`] - reservations
//! - [`resenas`] - reviews
//! - [`horarios`] - weekly schedules
//! - [`promociones`] - promotions
//! - [`favoritos`] - favorites
//! - [`grupos`] - groups and memberships
//! - [`denuncias`] - complaints
//! - [`usuarios`] - user management

use axum::Router;

use crate::core::ServerState;

pub mod canchas;
pub mod complejos;
pub mod denuncias;
pub mod disponibilidad;
pub mod favoritos;
pub mod grupos;
pub mod health;
pub mod horarios;
pub mod promociones;
pub mod resenas;
pub mod reservas;
pub mod usuarios;

// Re-export common types for handlers
pub use crate::common::{AppError, AppResult};

/// The complete route table
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(disponibilidad::router())
        .merge(complejos::router())
        .merge(canchas::router())
        .merge(reservas::router())
        .merge(resenas::router())
        .merge(horarios::router())
        .merge(promociones::router())
        .merge(favoritos::router())
        .merge(grupos::router())
        .merge(denuncias::router())
        .merge(usuarios::router())
}
