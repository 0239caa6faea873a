//! Formateo legible de tamaños en bytes (base 1024).

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    // Redondeo a un decimal alejándose de cero en los empates (1.25 -> 1.3)
    let rounded = (value * 10.0).round() / 10.0;
    format!("{:.1} {}", rounded, UNITS[unit])
}
