//! Encabezados de fecha en noruego.

use chrono::{Datelike, NaiveDate};

const WEEKDAYS: [&str; 7] = [
    "søndag", "mandag", "tirsdag", "onsdag", "torsdag", "fredag", "lørdag",
];

/// `2024-06-01` -> `01.06.2024 (Lørdag)`.
///
/// El patrón de nombres no valida el calendario, así que una fecha imposible
/// se muestra tal cual.
pub fn date_heading(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(day) => {
            let weekday = WEEKDAYS[day.weekday().num_days_from_sunday() as usize];
            format!("{} ({})", day.format("%d.%m.%Y"), capitalize(weekday))
        }
        Err(_) => date.to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_norwegian_heading() {
        assert_eq!(date_heading("2024-06-01"), "01.06.2024 (Lørdag)");
        assert_eq!(date_heading("2024-06-02"), "02.06.2024 (Søndag)");
        assert_eq!(date_heading("2024-01-01"), "01.01.2024 (Mandag)");
    }

    #[test]
    fn impossible_date_is_shown_verbatim() {
        assert_eq!(date_heading("2024-13-45"), "2024-13-45");
    }
}
