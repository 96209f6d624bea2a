//! Occupancy aggregation
//!
//! Single pass over an availability tree. Derived on every query, never
//! persisted.

use rust_decimal::prelude::*;

use shared::models::{ConsultaDisponibilidad, DisponibilidadComplejo, EstadisticasOcupacion};

use crate::{ClientResult, HttpClient};

const DECIMAL_PLACES: u32 = 2;

fn redondear(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Aggregate occupancy over every slot of the tree.
///
/// Counts total and occupied slots and sums the price of occupied ones;
/// `ocupacion_promedio` is `ocupados / total` (0 for an empty range, not
/// an error). Ratio and revenue round to 2 decimals, half away from zero.
pub fn resumen_ocupacion(disponibilidad: &DisponibilidadComplejo) -> EstadisticasOcupacion {
    let mut total_slots: u64 = 0;
    let mut slots_ocupados: u64 = 0;
    let mut ingresos = Decimal::ZERO;

    for cancha in &disponibilidad.canchas {
        for dia in &cancha.dias {
            for slot in &dia.slots {
                total_slots += 1;
                if !slot.disponible {
                    slots_ocupados += 1;
                    ingresos += Decimal::from_f64(slot.precio).unwrap_or(Decimal::ZERO);
                }
            }
        }
    }

    let ocupacion = if total_slots > 0 {
        Decimal::from(slots_ocupados) / Decimal::from(total_slots)
    } else {
        Decimal::ZERO
    };

    EstadisticasOcupacion {
        ocupacion_promedio: redondear(ocupacion),
        total_slots,
        slots_ocupados,
        slots_disponibles: total_slots - slots_ocupados,
        ingresos_estimados: redondear(ingresos),
    }
}

impl HttpClient {
    /// Occupancy statistics for a complex over a date range.
    ///
    /// Fetches the full tree (`solo_disponibles = false`, occupied slots
    /// included) and aggregates locally.
    pub async fn estadisticas_ocupacion(
        &self,
        id_complejo: i64,
        fecha_inicio: &str,
        fecha_fin: &str,
    ) -> ClientResult<EstadisticasOcupacion> {
        let consulta = ConsultaDisponibilidad {
            id_complejo: Some(id_complejo),
            fecha_inicio: fecha_inicio.to_string(),
            fecha_fin: fecha_fin.to_string(),
            solo_disponibles: Some(false),
            ..Default::default()
        };

        let disponibilidad = self.disponibilidad(&consulta).await?;
        Ok(resumen_ocupacion(&disponibilidad))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{DisponibilidadCancha, DisponibilidadDia, DisponibilidadSlot};

    fn slot(inicio: &str, disponible: bool, precio: f64) -> DisponibilidadSlot {
        DisponibilidadSlot {
            fecha: "2026-03-01".into(),
            hora_inicio: inicio.into(),
            hora_fin: format!("{}:59", &inicio[..2]),
            disponible,
            precio,
            id_cancha: 1,
            id_complejo: 1,
        }
    }

    fn arbol(slots: Vec<DisponibilidadSlot>) -> DisponibilidadComplejo {
        DisponibilidadComplejo {
            id_complejo: 1,
            nombre_complejo: "Complejo Centro".into(),
            canchas: vec![DisponibilidadCancha {
                id_cancha: 1,
                nombre_cancha: "Cancha 1".into(),
                deporte: "padel".into(),
                dias: vec![DisponibilidadDia {
                    fecha: "2026-03-01".into(),
                    dia_semana: "domingo".into(),
                    slots,
                }],
            }],
        }
    }

    #[test]
    fn empty_range_is_all_zeros() {
        let resumen = resumen_ocupacion(&arbol(vec![]));
        assert_eq!(
            resumen,
            EstadisticasOcupacion {
                ocupacion_promedio: 0.0,
                total_slots: 0,
                slots_ocupados: 0,
                slots_disponibles: 0,
                ingresos_estimados: 0.0,
            }
        );
    }

    #[test]
    fn counts_balance_and_revenue_is_occupied_only() {
        let resumen = resumen_ocupacion(&arbol(vec![
            slot("08:00", false, 15000.0),
            slot("09:00", true, 99999.0),
            slot("10:00", false, 5000.0),
        ]));
        assert_eq!(resumen.total_slots, 3);
        assert_eq!(resumen.slots_ocupados, 2);
        assert_eq!(resumen.slots_disponibles, 1);
        assert_eq!(
            resumen.slots_ocupados + resumen.slots_disponibles,
            resumen.total_slots
        );
        // The free 99999 slot contributes nothing
        assert_eq!(resumen.ingresos_estimados, 20000.0);
        assert_eq!(resumen.ocupacion_promedio, 0.67);
    }

    #[test]
    fn fully_available_range_earns_nothing() {
        let resumen = resumen_ocupacion(&arbol(vec![
            slot("08:00", true, 10000.0),
            slot("09:00", true, 10000.0),
        ]));
        assert_eq!(resumen.slots_ocupados, 0);
        assert_eq!(resumen.ingresos_estimados, 0.0);
        assert_eq!(resumen.ocupacion_promedio, 0.0);
    }

    #[test]
    fn half_occupied_day() {
        // Two slots, one occupied at 15000: ratio 0.5, revenue 15000
        let resumen = resumen_ocupacion(&arbol(vec![
            slot("09:00", true, 0.0),
            slot("08:00", false, 15000.0),
        ]));
        assert_eq!(resumen.total_slots, 2);
        assert_eq!(resumen.slots_ocupados, 1);
        assert_eq!(resumen.slots_disponibles, 1);
        assert_eq!(resumen.ocupacion_promedio, 0.5);
        assert_eq!(resumen.ingresos_estimados, 15000.0);
    }

    #[test]
    fn ratio_rounds_half_away_from_zero() {
        // 1 of 8 occupied: 0.125 rounds to 0.13
        let mut slots = vec![slot("08:00", false, 1000.0)];
        for h in 9..16 {
            slots.push(slot(&format!("{:02}:00", h), true, 1000.0));
        }
        let resumen = resumen_ocupacion(&arbol(slots));
        assert_eq!(resumen.ocupacion_promedio, 0.13);
    }
}
