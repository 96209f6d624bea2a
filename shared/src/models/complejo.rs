//! Complex (complejo) model
//!
//! A facility containing one or more courts.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{BloqueoTemporal, Cancha, Horario};

/// Complex entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complejo {
    pub id_complejo: i64,
    pub id_dueno: i64,
    pub nombre: String,
    pub direccion: Option<String>,
    pub comuna: Option<String>,
    pub id_comuna: Option<i64>,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
    pub descripcion: Option<String>,
    pub activo: bool,
    pub rating_promedio: Option<f64>,
    pub total_resenas: i64,
    pub distancia_km: Option<f64>,
}

/// Create complex payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = validate_horario_atencion))]
pub struct ComplejoCreate {
    #[validate(length(min = 1, message = "el nombre del complejo es requerido"))]
    pub nombre: String,
    #[validate(length(min = 1, message = "la direccion es requerida"))]
    pub direccion: String,
    pub id_comuna: Option<i64>,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
    pub descripcion: Option<String>,
    /// Daily opening time, `HH:MM`
    pub hora_apertura: String,
    /// Daily closing time, `HH:MM`, must be after `hora_apertura`
    pub hora_cierre: String,
}

/// Update complex payload (partial)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ComplejoUpdate {
    #[validate(length(min = 1, message = "el nombre del complejo no puede estar vacio"))]
    pub nombre: Option<String>,
    pub direccion: Option<String>,
    pub id_comuna: Option<i64>,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
    pub descripcion: Option<String>,
    pub hora_apertura: Option<String>,
    pub hora_cierre: Option<String>,
}

/// Payload for `PATCH /complejos/{id}/estado`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CambioEstadoComplejo {
    pub activo: bool,
}

/// List query for `GET /complejos`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComplejoListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_comuna: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Upstream-computed occupancy summary for a complex over a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumenComplejo {
    pub id_complejo: i64,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub reservas_confirmadas: u64,
    pub horas_reservadas: f64,
    pub ingresos_confirmados: f64,
    /// Occupied fraction in [0, 1]
    pub ocupacion: f64,
}

/// Aggregated complex detail: info plus its courts, schedules and blocks.
///
/// Secondary lists may be empty when their upstream fetch failed; only the
/// complex info itself is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplejoDetalle {
    pub complejo: Complejo,
    pub canchas: Vec<Cancha>,
    pub horarios: Vec<Horario>,
    pub bloqueos: Vec<BloqueoTemporal>,
}

/// `HH:MM`, 00-23 hours and 00-59 minutes
pub fn es_hora_valida(hora: &str) -> bool {
    let Some((h, m)) = hora.split_once(':') else {
        return false;
    };
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return false;
    }
    if !h.chars().all(|c| c.is_ascii_digit()) || !m.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let horas_ok = matches!(h.parse::<u32>(), Ok(v) if v < 24);
    let minutos_ok = matches!(m.parse::<u32>(), Ok(v) if v < 60);
    horas_ok && minutos_ok
}

fn validate_horario_atencion(payload: &ComplejoCreate) -> Result<(), ValidationError> {
    if !es_hora_valida(&payload.hora_apertura) || !es_hora_valida(&payload.hora_cierre) {
        return Err(ValidationError::new("hora_formato")
            .with_message("las horas deben estar en formato HH:MM".into()));
    }
    // Same-format strings, lexicographic comparison is enough
    if payload.hora_apertura >= payload.hora_cierre {
        return Err(ValidationError::new("hora_rango")
            .with_message("la hora de apertura debe ser anterior a la hora de cierre".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ComplejoCreate {
        ComplejoCreate {
            nombre: "Complejo Centro".into(),
            direccion: "Av. Alemania 1234".into(),
            id_comuna: Some(1),
            latitud: None,
            longitud: None,
            descripcion: None,
            hora_apertura: "08:00".into(),
            hora_cierre: "22:00".into(),
        }
    }

    #[test]
    fn create_payload_validates() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let mut p = payload();
        p.nombre = "".into();
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_inverted_hours() {
        let mut p = payload();
        p.hora_apertura = "22:00".into();
        p.hora_cierre = "08:00".into();
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_malformed_hours() {
        let mut p = payload();
        p.hora_cierre = "25:99".into();
        assert!(p.validate().is_err());
        assert!(!es_hora_valida("8h30"));
        assert!(es_hora_valida("09:30"));
    }
}
