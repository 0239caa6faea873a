//! Franjas de dos horas derivadas de la hora de inicio.

/// Duración de cada franja de grabación en horas.
pub const SLOT_HOURS: u8 = 2;

/// Etiqueta `HH:00-HH:00`; el final da la vuelta a medianoche.
pub fn time_slot(hour: u8) -> String {
    let end = (u16::from(hour) + u16::from(SLOT_HOURS)) % 24;
    format!("{:02}:00-{:02}:00", hour, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn morning_slot() {
        assert_eq!(time_slot(6), "06:00-08:00");
    }

    #[test]
    fn wraps_at_midnight() {
        assert_eq!(time_slot(22), "22:00-00:00");
        assert_eq!(time_slot(23), "23:00-01:00");
    }

    #[test]
    fn every_hour_is_zero_padded() {
        for hour in 0u8..24 {
            let label = time_slot(hour);
            assert_eq!(label.len(), 11, "{}", label);
            let end: u8 = label[6..8].parse().unwrap();
            assert_eq!(end, (hour + 2) % 24);
            assert_eq!(&label[0..2], format!("{:02}", hour));
            assert!(label.ends_with(":00"));
        }
    }

    #[test]
    fn lexicographic_order_is_chronological() {
        let mut slots: Vec<String> = [22u8, 6, 14, 0, 10].iter().map(|h| time_slot(*h)).collect();
        slots.sort();
        assert_eq!(
            slots,
            vec![
                "00:00-02:00",
                "06:00-08:00",
                "10:00-12:00",
                "14:00-16:00",
                "22:00-00:00"
            ]
        );
    }
}
