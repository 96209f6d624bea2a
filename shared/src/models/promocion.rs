//! Promotion (promocion) model and local evaluation
//!
//! A promotion is a percentage or flat discount scoped to a court or a
//! complex, valid inside a datetime window, optionally restricted to some
//! weekdays and to minimum hours/amount. Evaluation is pure: it never
//! mutates the promotion and is recomputed on every request.

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Discount kind: percentage of the base price or a flat amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromoTipo {
    Porcentaje,
    Fijo,
}

/// Promotion lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromoEstado {
    Activa,
    Inactiva,
    Programada,
}

/// Promotion entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promocion {
    pub id_promocion: i64,
    pub nombre: String,
    pub descripcion: Option<String>,

    pub tipo: PromoTipo,
    /// 10 means 10% for `Porcentaje`, $10 for `Fijo`
    pub valor: f64,
    /// Upper bound on the discount amount, if any
    pub tope_descuento: Option<f64>,

    // Scope
    pub id_cancha: Option<i64>,
    pub id_complejo: Option<i64>,

    // Validity
    /// ISO datetime
    pub fecha_inicio: String,
    /// ISO datetime
    pub fecha_fin: String,
    /// Allowed weekdays, 0..6 with 0 = Sunday; absent means every day
    pub dias_semana: Option<Vec<u8>>,

    // Optional rules
    pub min_horas: Option<f64>,
    pub min_monto: Option<f64>,

    pub estado: PromoEstado,
    pub fecha_creacion: String,
    pub fecha_actualizacion: String,
}

/// Create promotion payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PromocionCreate {
    #[validate(length(min = 1, message = "el nombre de la promocion es requerido"))]
    pub nombre: String,
    pub descripcion: Option<String>,
    pub tipo: PromoTipo,
    #[validate(range(min = 0.0, message = "el valor no puede ser negativo"))]
    pub valor: f64,
    pub tope_descuento: Option<f64>,
    pub id_cancha: Option<i64>,
    pub id_complejo: Option<i64>,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub dias_semana: Option<Vec<u8>>,
    pub min_horas: Option<f64>,
    pub min_monto: Option<f64>,
    pub estado: Option<PromoEstado>,
}

/// Update promotion payload (partial)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromocionUpdate {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub tipo: Option<PromoTipo>,
    pub valor: Option<f64>,
    pub tope_descuento: Option<f64>,
    pub id_cancha: Option<i64>,
    pub id_complejo: Option<i64>,
    pub fecha_inicio: Option<String>,
    pub fecha_fin: Option<String>,
    pub dias_semana: Option<Vec<u8>>,
    pub min_horas: Option<f64>,
    pub min_monto: Option<f64>,
    pub estado: Option<PromoEstado>,
}

/// List query for `GET /promociones`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromocionListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<PromoEstado>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_cancha: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_complejo: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vigentes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Request to evaluate a promotion against a base price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoEvalRequest {
    pub id_promocion: i64,
    /// Price before discount
    pub precio_base: f64,
    /// Reserved hours, checked against `min_horas`
    pub horas: Option<f64>,
    /// ISO datetime of the reservation, checked against the validity window
    pub fecha: Option<String>,
}

/// Result of evaluating a promotion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoEvalResponse {
    pub id_promocion: i64,
    pub aplicado: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivo_no_aplica: Option<String>,
    /// Discounted amount, >= 0
    pub descuento: f64,
    /// `precio_base - descuento`, never negative
    pub precio_final: f64,
}

const DECIMAL_PLACES: u32 = 2;

fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

fn parse_fecha(fecha: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(fecha, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(fecha, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(fecha, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

fn no_aplica(req: &PromoEvalRequest, motivo: &str) -> PromoEvalResponse {
    PromoEvalResponse {
        id_promocion: req.id_promocion,
        aplicado: false,
        motivo_no_aplica: Some(motivo.to_string()),
        descuento: 0.0,
        precio_final: to_f64(to_decimal(req.precio_base)),
    }
}

/// Evaluate a promotion against a base price.
///
/// Rejections report a reason and leave the price untouched. Applied
/// discounts are capped by `tope_descuento` and by the base price itself,
/// so the final price never goes negative. Amounts are rounded to 2
/// decimals, half away from zero.
pub fn evaluar_promocion(promo: &Promocion, req: &PromoEvalRequest) -> PromoEvalResponse {
    if promo.estado != PromoEstado::Activa {
        return no_aplica(req, "la promocion no esta activa");
    }

    if let Some(fecha) = &req.fecha {
        // Validity window: all datetimes share the ISO format, so string
        // comparison matches chronological order.
        if fecha.as_str() < promo.fecha_inicio.as_str()
            || fecha.as_str() > promo.fecha_fin.as_str()
        {
            return no_aplica(req, "fuera del periodo de vigencia");
        }

        if let Some(dias) = &promo.dias_semana
            && !dias.is_empty()
        {
            let Some(parsed) = parse_fecha(fecha) else {
                return no_aplica(req, "fecha invalida");
            };
            let dia = parsed.weekday().num_days_from_sunday() as u8;
            if !dias.contains(&dia) {
                return no_aplica(req, "dia de la semana no incluido");
            }
        }
    }

    if let Some(min_horas) = promo.min_horas
        && req.horas.unwrap_or(0.0) < min_horas
    {
        return no_aplica(req, "no cumple el minimo de horas");
    }

    if let Some(min_monto) = promo.min_monto
        && req.precio_base < min_monto
    {
        return no_aplica(req, "no cumple el monto minimo");
    }

    let base = to_decimal(req.precio_base);
    let valor = to_decimal(promo.valor);

    let mut descuento = match promo.tipo {
        PromoTipo::Porcentaje => base * valor / Decimal::ONE_HUNDRED,
        PromoTipo::Fijo => valor,
    };

    if let Some(tope) = promo.tope_descuento {
        descuento = descuento.min(to_decimal(tope));
    }
    // Floor the final price at zero
    descuento = descuento.min(base).max(Decimal::ZERO);

    PromoEvalResponse {
        id_promocion: req.id_promocion,
        aplicado: true,
        motivo_no_aplica: None,
        descuento: to_f64(descuento),
        precio_final: to_f64(base - descuento),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn promo() -> Promocion {
        Promocion {
            id_promocion: 1,
            nombre: "Happy hour".into(),
            descripcion: None,
            tipo: PromoTipo::Porcentaje,
            valor: 10.0,
            tope_descuento: None,
            id_cancha: None,
            id_complejo: Some(5),
            fecha_inicio: "2026-01-01T00:00:00".into(),
            fecha_fin: "2026-12-31T23:59:59".into(),
            dias_semana: None,
            min_horas: None,
            min_monto: None,
            estado: PromoEstado::Activa,
            fecha_creacion: "2026-01-01T00:00:00".into(),
            fecha_actualizacion: "2026-01-01T00:00:00".into(),
        }
    }

    fn req(precio_base: f64) -> PromoEvalRequest {
        PromoEvalRequest {
            id_promocion: 1,
            precio_base,
            horas: Some(1.0),
            fecha: Some("2026-06-15T18:00:00".into()),
        }
    }

    #[test]
    fn percentage_discount_applies() {
        let res = evaluar_promocion(&promo(), &req(20000.0));
        assert!(res.aplicado);
        assert_eq!(res.descuento, 2000.0);
        assert_eq!(res.precio_final, 18000.0);
    }

    #[test]
    fn discount_is_capped() {
        let mut p = promo();
        p.tope_descuento = Some(500.0);
        let res = evaluar_promocion(&p, &req(20000.0));
        assert_eq!(res.descuento, 500.0);
        assert_eq!(res.precio_final, 19500.0);
    }

    #[test]
    fn flat_discount_never_goes_negative() {
        let mut p = promo();
        p.tipo = PromoTipo::Fijo;
        p.valor = 3000.0;
        let res = evaluar_promocion(&p, &req(1000.0));
        assert_eq!(res.descuento, 1000.0);
        assert_eq!(res.precio_final, 0.0);
    }

    #[test]
    fn inactive_promotion_does_not_apply() {
        let mut p = promo();
        p.estado = PromoEstado::Inactiva;
        let res = evaluar_promocion(&p, &req(20000.0));
        assert!(!res.aplicado);
        assert!(res.motivo_no_aplica.is_some());
        assert_eq!(res.precio_final, 20000.0);
    }

    #[test]
    fn out_of_window_reports_reason() {
        let res = evaluar_promocion(
            &promo(),
            &PromoEvalRequest {
                fecha: Some("2027-03-01T10:00:00".into()),
                ..req(20000.0)
            },
        );
        assert!(!res.aplicado);
        assert_eq!(
            res.motivo_no_aplica.as_deref(),
            Some("fuera del periodo de vigencia")
        );
    }

    #[test]
    fn weekday_mask_is_honored() {
        let mut p = promo();
        // 2026-06-15 is a Monday (1 with 0 = Sunday)
        p.dias_semana = Some(vec![0, 6]);
        let res = evaluar_promocion(&p, &req(20000.0));
        assert!(!res.aplicado);

        p.dias_semana = Some(vec![1]);
        let res = evaluar_promocion(&p, &req(20000.0));
        assert!(res.aplicado);
    }

    #[test]
    fn minimums_are_enforced() {
        let mut p = promo();
        p.min_horas = Some(2.0);
        assert!(!evaluar_promocion(&p, &req(20000.0)).aplicado);

        let mut p = promo();
        p.min_monto = Some(50000.0);
        assert!(!evaluar_promocion(&p, &req(20000.0)).aplicado);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        let mut p = promo();
        p.valor = 12.5;
        // 12.5% of 100.1 = 12.5125 -> 12.51
        let res = evaluar_promocion(&p, &req(100.1));
        assert_eq!(res.descuento, 12.51);
        assert_eq!(res.precio_final, 87.59);
    }
}
