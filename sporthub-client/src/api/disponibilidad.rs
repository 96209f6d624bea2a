//! Availability queries
//!
//! The fetcher normalizes whatever the upstream returns into a stable
//! shape: days sorted by date, slots sorted by start time, prices
//! defaulted. Everything downstream (aggregation, next-slot extraction)
//! relies on that ordering.

use chrono::{Days, Local};

use shared::models::{
    ConsultaDisponibilidad, DisponibilidadCancha, DisponibilidadComplejo, DisponibilidadSlot,
    VerificacionRespuesta, VerificacionSlot,
};

use crate::{ClientError, ClientResult, FailurePolicy, HttpClient};

/// Forward window for "next available slots", in days
pub const VENTANA_PROXIMOS_DIAS: u64 = 7;

/// Sort the tree in place and default absent prices.
///
/// Days per court ascend by `fecha` (ISO dates, lexicographic order is
/// calendar order); slots per day ascend by `hora_inicio` (all `HH:MM`).
pub fn normalizar_disponibilidad(disponibilidad: &mut DisponibilidadComplejo) {
    for cancha in &mut disponibilidad.canchas {
        cancha.dias.sort_by(|a, b| a.fecha.cmp(&b.fecha));
        for dia in &mut cancha.dias {
            dia.slots
                .sort_by(|a, b| a.hora_inicio.cmp(&b.hora_inicio));
        }
    }
}

/// Walk the normalized days of a court and collect up to `limite` free
/// slots, in chronological order. Exhausting the window before reaching
/// the limit is not an error.
pub fn extraer_proximos(cancha: &DisponibilidadCancha, limite: usize) -> Vec<DisponibilidadSlot> {
    let mut slots = Vec::new();
    for dia in &cancha.dias {
        for slot in &dia.slots {
            if slot.disponible {
                slots.push(slot.clone());
                if slots.len() >= limite {
                    return slots;
                }
            }
        }
    }
    slots
}

impl HttpClient {
    /// Query court availability over a date range.
    ///
    /// One upstream request; the response is normalized before it is
    /// returned. Failures surface immediately, no retries.
    pub async fn disponibilidad(
        &self,
        consulta: &ConsultaDisponibilidad,
    ) -> ClientResult<DisponibilidadComplejo> {
        let mut disponibilidad: DisponibilidadComplejo =
            self.get_query("/disponibilidad", consulta).await?;
        normalizar_disponibilidad(&mut disponibilidad);
        Ok(disponibilidad)
    }

    /// Availability for a single court.
    ///
    /// The fetch contract guarantees the requested court appears in the
    /// tree when it exists, so a successful response without it is an
    /// upstream inconsistency and maps to [`ClientError::NotFound`].
    pub async fn disponibilidad_cancha(
        &self,
        id_cancha: i64,
        fecha_inicio: &str,
        fecha_fin: &str,
        solo_disponibles: bool,
    ) -> ClientResult<DisponibilidadCancha> {
        let consulta = ConsultaDisponibilidad {
            id_cancha: Some(id_cancha),
            fecha_inicio: fecha_inicio.to_string(),
            fecha_fin: fecha_fin.to_string(),
            solo_disponibles: Some(solo_disponibles),
            ..Default::default()
        };

        let disponibilidad = self.disponibilidad(&consulta).await?;
        disponibilidad
            .canchas
            .into_iter()
            .find(|c| c.id_cancha == id_cancha)
            .ok_or_else(|| {
                ClientError::NotFound(format!("disponibilidad de la cancha {}", id_cancha))
            })
    }

    /// Availability of a whole complex for one day.
    ///
    /// Always fetched with `solo_disponibles = false` so callers can tell
    /// "reserved" apart from "no slots configured".
    pub async fn disponibilidad_dia(
        &self,
        id_complejo: i64,
        fecha: &str,
    ) -> ClientResult<DisponibilidadComplejo> {
        let consulta = ConsultaDisponibilidad {
            id_complejo: Some(id_complejo),
            fecha_inicio: fecha.to_string(),
            fecha_fin: fecha.to_string(),
            solo_disponibles: Some(false),
            ..Default::default()
        };
        self.disponibilidad(&consulta).await
    }

    /// Next free slots of a court within the fixed forward window.
    ///
    /// Returns at most `limite` slots; fewer when the window runs dry.
    pub async fn proximos_slots(
        &self,
        id_cancha: i64,
        limite: usize,
    ) -> ClientResult<Vec<DisponibilidadSlot>> {
        let hoy = Local::now().date_naive();
        let fin = hoy
            .checked_add_days(Days::new(VENTANA_PROXIMOS_DIAS))
            .unwrap_or(hoy);

        let cancha = self
            .disponibilidad_cancha(
                id_cancha,
                &hoy.format("%Y-%m-%d").to_string(),
                &fin.format("%Y-%m-%d").to_string(),
                true,
            )
            .await?;

        Ok(extraer_proximos(&cancha, limite))
    }

    /// Check whether one specific slot is free.
    ///
    /// With [`FailurePolicy::FailClosed`] any upstream failure resolves
    /// to `false`: a booking flow must never treat an unknown state as
    /// available. With [`FailurePolicy::Propagate`] the error surfaces.
    pub async fn verificar_slot(
        &self,
        verificacion: &VerificacionSlot,
        on_error: FailurePolicy,
    ) -> ClientResult<bool> {
        let resultado: ClientResult<VerificacionRespuesta> = self
            .get_query("/disponibilidad/verificar", verificacion)
            .await;

        match resultado {
            Ok(respuesta) => Ok(respuesta.disponible),
            Err(err) => match on_error {
                FailurePolicy::Propagate => Err(err),
                FailurePolicy::FailClosed => {
                    tracing::warn!(
                        id_cancha = verificacion.id_cancha,
                        fecha = %verificacion.fecha,
                        error = %err,
                        "slot verification failed, treating as unavailable"
                    );
                    Ok(false)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::DisponibilidadDia;

    fn slot(fecha: &str, inicio: &str, fin: &str, disponible: bool, precio: f64) -> DisponibilidadSlot {
        DisponibilidadSlot {
            fecha: fecha.into(),
            hora_inicio: inicio.into(),
            hora_fin: fin.into(),
            disponible,
            precio,
            id_cancha: 1,
            id_complejo: 1,
        }
    }

    fn arbol_desordenado() -> DisponibilidadComplejo {
        DisponibilidadComplejo {
            id_complejo: 1,
            nombre_complejo: "Complejo Centro".into(),
            canchas: vec![DisponibilidadCancha {
                id_cancha: 1,
                nombre_cancha: "Cancha 1".into(),
                deporte: "futbol".into(),
                dias: vec![
                    DisponibilidadDia {
                        fecha: "2026-03-02".into(),
                        dia_semana: "lunes".into(),
                        slots: vec![
                            slot("2026-03-02", "10:00", "11:00", true, 12000.0),
                            slot("2026-03-02", "09:00", "10:00", false, 12000.0),
                        ],
                    },
                    DisponibilidadDia {
                        fecha: "2026-03-01".into(),
                        dia_semana: "domingo".into(),
                        slots: vec![
                            slot("2026-03-01", "09:00", "10:00", true, 0.0),
                            slot("2026-03-01", "08:00", "09:00", false, 15000.0),
                        ],
                    },
                ],
            }],
        }
    }

    #[test]
    fn normalization_sorts_days_and_slots() {
        let mut arbol = arbol_desordenado();
        normalizar_disponibilidad(&mut arbol);

        let dias = &arbol.canchas[0].dias;
        let fechas: Vec<&str> = dias.iter().map(|d| d.fecha.as_str()).collect();
        assert_eq!(fechas, ["2026-03-01", "2026-03-02"]);

        for dia in dias {
            let horas: Vec<&str> = dia.slots.iter().map(|s| s.hora_inicio.as_str()).collect();
            let mut ordenadas = horas.clone();
            ordenadas.sort();
            assert_eq!(horas, ordenadas);
        }
        assert_eq!(dias[0].slots[0].hora_inicio, "08:00");
        assert_eq!(dias[0].slots[1].hora_inicio, "09:00");
    }

    #[test]
    fn next_slots_are_capped_and_all_available() {
        let mut arbol = arbol_desordenado();
        normalizar_disponibilidad(&mut arbol);
        let cancha = &arbol.canchas[0];

        let proximos = extraer_proximos(cancha, 2);
        assert_eq!(proximos.len(), 2);
        assert!(proximos.iter().all(|s| s.disponible));
        // Chronological: the free slot of day one comes first
        assert_eq!(proximos[0].fecha, "2026-03-01");
        assert_eq!(proximos[0].hora_inicio, "09:00");

        // A window with fewer free slots than the limit is not an error
        let todos = extraer_proximos(cancha, 10);
        assert_eq!(todos.len(), 2);
    }

    #[test]
    fn absent_price_deserializes_to_zero() {
        let json = r#"{
            "fecha": "2026-03-01",
            "hora_inicio": "09:00",
            "hora_fin": "10:00",
            "disponible": true,
            "id_cancha": 1,
            "id_complejo": 1
        }"#;
        let slot: DisponibilidadSlot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.precio, 0.0);
    }

    #[tokio::test]
    async fn verification_fails_closed_on_network_error() {
        // Nothing listens here; the connection is refused
        let client = crate::ClientConfig::new("http://127.0.0.1:9")
            .with_timeout_ms(2_000)
            .build();
        let verificacion = VerificacionSlot {
            id_cancha: 1,
            fecha: "2026-03-01".into(),
            hora_inicio: "09:00".into(),
            hora_fin: "10:00".into(),
        };

        let disponible = client
            .verificar_slot(&verificacion, FailurePolicy::FailClosed)
            .await
            .unwrap();
        assert!(!disponible);

        // Propagation keeps the error visible instead
        let err = client
            .verificar_slot(&verificacion, FailurePolicy::Propagate)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Network(_) | ClientError::Request(_)
        ));
    }
}
