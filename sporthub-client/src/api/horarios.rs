//! Weekly schedule API

use shared::models::{Horario, HorarioCreate, HorarioListQuery, HorarioUpdate};
use shared::util::cmp_dia_semana;

use crate::{ClientResult, HttpClient};

/// Sort schedule rows by weekday (Monday first), then by opening time.
///
/// Every place that lays out a week uses this so the layouts agree.
pub fn ordenar_horarios(horarios: &mut [Horario]) {
    horarios.sort_by(|a, b| {
        cmp_dia_semana(&a.dia_semana, &b.dia_semana)
            .then_with(|| a.hora_apertura.cmp(&b.hora_apertura))
    });
}

impl HttpClient {
    /// List schedules, in week order
    pub async fn horarios(&self, query: &HorarioListQuery) -> ClientResult<Vec<Horario>> {
        let mut horarios: Vec<Horario> = self.get_query("/horarios", query).await?;
        ordenar_horarios(&mut horarios);
        Ok(horarios)
    }

    /// Get a single schedule row
    pub async fn horario(&self, id: i64) -> ClientResult<Horario> {
        self.get(&format!("/horarios/{}", id)).await
    }

    /// Create a schedule row
    pub async fn crear_horario(&self, payload: &HorarioCreate) -> ClientResult<Horario> {
        self.post("/horarios", payload).await
    }

    /// Replace a schedule row
    pub async fn actualizar_horario(
        &self,
        id: i64,
        payload: &HorarioUpdate,
    ) -> ClientResult<Horario> {
        self.put(&format!("/horarios/{}", id), payload).await
    }

    /// Delete a schedule row
    pub async fn eliminar_horario(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/horarios/{}", id)).await
    }

    /// Weekly schedule of a single court, in week order
    pub async fn horarios_de_cancha(&self, id_cancha: i64) -> ClientResult<Vec<Horario>> {
        let mut horarios: Vec<Horario> =
            self.get(&format!("/canchas/{}/horarios", id_cancha)).await?;
        ordenar_horarios(&mut horarios);
        Ok(horarios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horario(dia: &str, apertura: &str) -> Horario {
        Horario {
            id_horario: 0,
            id_complejo: 1,
            id_cancha: None,
            dia_semana: dia.into(),
            hora_apertura: apertura.into(),
            hora_cierre: "23:00".into(),
        }
    }

    #[test]
    fn week_sorts_monday_first_then_by_opening() {
        let mut horarios = vec![
            horario("domingo", "09:00"),
            horario("lunes", "14:00"),
            horario("Lunes", "08:00"),
            horario("miercoles", "10:00"),
        ];
        ordenar_horarios(&mut horarios);

        let orden: Vec<(&str, &str)> = horarios
            .iter()
            .map(|h| (h.dia_semana.as_str(), h.hora_apertura.as_str()))
            .collect();
        assert_eq!(
            orden,
            [
                ("Lunes", "08:00"),
                ("lunes", "14:00"),
                ("miercoles", "10:00"),
                ("domingo", "09:00"),
            ]
        );
    }
}
