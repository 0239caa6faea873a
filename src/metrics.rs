use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter, register_int_gauge, Encoder, Histogram, IntCounter,
    IntGauge, TextEncoder,
};

lazy_static! {
    // Escaneos del directorio de grabaciones
    pub static ref CATALOG_SCANS: IntCounter = register_int_counter!(
        "opptak_catalog_scans_total",
        "Número total de escaneos del directorio de grabaciones"
    ).expect("No se pudo crear el contador CATALOG_SCANS");

    pub static ref CATALOG_SCAN_FAILURES: IntCounter = register_int_counter!(
        "opptak_catalog_scan_failures_total",
        "Número total de escaneos fallidos (directorio ilegible)"
    ).expect("No se pudo crear el contador CATALOG_SCAN_FAILURES");

    pub static ref CATALOG_SKIPPED_ENTRIES: IntCounter = register_int_counter!(
        "opptak_catalog_skipped_entries_total",
        "Entradas descartadas por nombre inválido o archivo desaparecido"
    ).expect("No se pudo crear el contador CATALOG_SKIPPED_ENTRIES");

    pub static ref CATALOG_SCAN_DURATION: Histogram = register_histogram!(
        "opptak_catalog_scan_duration_seconds",
        "Duración de los escaneos del directorio de grabaciones"
    ).expect("No se pudo crear el histograma CATALOG_SCAN_DURATION");

    // Gauge con el número de grabaciones del último escaneo
    pub static ref CATALOG_RECORDINGS: IntGauge = register_int_gauge!(
        "opptak_catalog_recordings",
        "Número de grabaciones válidas en el último escaneo"
    ).expect("No se pudo crear el gauge CATALOG_RECORDINGS");

    pub static ref DOWNLOADS: IntCounter = register_int_counter!(
        "opptak_downloads_total",
        "Número total de descargas iniciadas"
    ).expect("No se pudo crear el contador DOWNLOADS");
}

/// Gather all metrics and encode them in Prometheus format
pub fn gather_metrics() -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
