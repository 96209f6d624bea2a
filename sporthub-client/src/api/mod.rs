//! Upstream API wrappers
//!
//! One module per resource, each extending [`crate::HttpClient`] with the
//! typed calls the BFF needs:
//!
//! - [`disponibilidad`] - availability tree, verification, next slots
//! - [`ocupacion`] - slot-level occupancy statistics
//! - [`complejos`] - complexes, including the best-effort detail join
//! - [`canchas`] - courts
//! - [`reservas`] - reservations and their state changes
//! - [`resenas`] - reviews
//! - [`horarios`] - weekly schedules
//! - [`promociones`] - promotions and evaluation
//! - [`favoritos`] - favorites
//! - [`grupos`] - groups and memberships
//! - [`denuncias`] - complaints
//! - [`usuarios`] - users

pub mod canchas;
pub mod complejos;
pub mod denuncias;
pub mod disponibilidad;
pub mod favoritos;
pub mod grupos;
pub mod horarios;
pub mod ocupacion;
pub mod promociones;
pub mod resenas;
pub mod reservas;
pub mod usuarios;
