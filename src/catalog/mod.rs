//! Catálogo de grabaciones para Opptak.
//!
//! Convierte un listado de directorio en grupos por fecha (más reciente
//! primero) ordenados por franja horaria, con clasificación de salud y
//! totales. Se reconstruye en cada petición; nada se guarda entre escaneos.

pub mod depends;

pub use depends::filename::{FilenamePattern, ParsedName};
pub use depends::format::format_bytes;
pub use depends::health::{Health, HealthThresholds, MIB};
pub use depends::timeslot::time_slot;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{OpptakError, Result};
use crate::storage::RecordingSource;

/// Configuración del constructor de catálogo.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub pattern: FilenamePattern,
    pub thresholds: HealthThresholds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recording {
    pub filename: String,
    pub date: String,
    pub hour: u8,
    pub timeslot: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
    pub health: Health,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateGroup {
    pub date: String,
    pub total_size: u64,
    pub recordings: Vec<Recording>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub total_count: usize,
    pub total_size: u64,
    pub scanned_at: DateTime<Utc>,
    pub groups: Vec<DateGroup>,
    /// Entradas descartadas: nombre inválido o archivo desaparecido.
    #[serde(skip)]
    pub skipped: usize,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn recordings(&self) -> impl Iterator<Item = &Recording> {
        self.groups.iter().flat_map(|g| g.recordings.iter())
    }
}

/// Escanea la fuente y construye el catálogo.
///
/// Un listado fallido es fatal y se distingue de un catálogo vacío. Los
/// nombres inválidos y los archivos que desaparecen antes del `stat` se
/// descartan sin error.
pub fn build_catalog<S>(source: &S, config: &CatalogConfig) -> Result<Catalog>
where
    S: RecordingSource + ?Sized,
{
    let entries = source
        .list_entries()
        .map_err(|e| OpptakError::StorageUnavailable {
            path: source.location().to_path_buf(),
            source: e,
        })?;

    let mut by_date: BTreeMap<String, Vec<Recording>> = BTreeMap::new();
    let mut skipped = 0usize;

    for name in entries {
        let Some(parsed) = config.pattern.parse(&name) else {
            log::debug!("catalog: ignoring {:?}", name);
            skipped += 1;
            continue;
        };

        let stat = match source.stat(&name) {
            Ok(stat) => stat,
            Err(e) => {
                log::debug!("catalog: skipping {}: {}", name, e);
                skipped += 1;
                continue;
            }
        };

        let recording = Recording {
            timeslot: time_slot(parsed.hour),
            health: config.thresholds.classify(stat.size),
            hour: parsed.hour,
            size: stat.size,
            modified: stat.modified,
            date: parsed.date,
            filename: name,
        };

        by_date
            .entry(recording.date.clone())
            .or_default()
            .push(recording);
    }

    let mut total_count = 0usize;
    let mut total_size = 0u64;

    let groups: Vec<DateGroup> = by_date
        .into_iter()
        .rev()
        .map(|(date, mut recordings)| {
            recordings.sort_by(|a, b| {
                a.timeslot
                    .cmp(&b.timeslot)
                    .then_with(|| a.filename.cmp(&b.filename))
            });
            let group_size: u64 = recordings.iter().map(|r| r.size).sum();
            total_count += recordings.len();
            total_size += group_size;
            DateGroup {
                date,
                total_size: group_size,
                recordings,
            }
        })
        .collect();

    Ok(Catalog {
        total_count,
        total_size,
        scanned_at: Utc::now(),
        groups,
        skipped,
    })
}
