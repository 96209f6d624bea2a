//! Small shared helpers

use std::cmp::Ordering;

/// Week layout used by every weekday sort, Monday first.
///
/// Lowercase, unaccented, as the upstream serializes `dia_semana`.
pub const DIAS_SEMANA: [&str; 7] = [
    "lunes",
    "martes",
    "miercoles",
    "jueves",
    "viernes",
    "sabado",
    "domingo",
];

/// Position of a weekday name in [`DIAS_SEMANA`], case-insensitive.
pub fn indice_dia_semana(dia: &str) -> Option<usize> {
    let dia = dia.to_lowercase();
    DIAS_SEMANA.iter().position(|d| *d == dia)
}

/// Ordering of two weekday names following [`DIAS_SEMANA`].
///
/// Unknown names sort after every known one so malformed upstream data
/// lands at the end instead of scrambling the week.
pub fn cmp_dia_semana(a: &str, b: &str) -> Ordering {
    let ia = indice_dia_semana(a).unwrap_or(DIAS_SEMANA.len());
    let ib = indice_dia_semana(b).unwrap_or(DIAS_SEMANA.len());
    ia.cmp(&ib)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(indice_dia_semana("Lunes"), Some(0));
        assert_eq!(indice_dia_semana("DOMINGO"), Some(6));
        assert_eq!(indice_dia_semana("funday"), None);
    }

    #[test]
    fn week_orders_monday_first() {
        assert_eq!(cmp_dia_semana("lunes", "domingo"), Ordering::Less);
        assert_eq!(cmp_dia_semana("sabado", "martes"), Ordering::Greater);
        assert_eq!(cmp_dia_semana("Jueves", "jueves"), Ordering::Equal);
    }

    #[test]
    fn unknown_days_sort_last() {
        assert_eq!(cmp_dia_semana("lunaes", "domingo"), Ordering::Greater);
    }
}
