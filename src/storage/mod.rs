//! Módulo de almacenamiento para Opptak.
//!
//! Capacidad mínima sobre el directorio de grabaciones: listar nombres y
//! leer tamaño y fecha de modificación. El catálogo solo depende del trait,
//! así se puede probar con datos sintéticos.

pub mod depends;

pub use depends::filesystem::DirectorySource;
pub use depends::paths::PathResolver;

use chrono::{DateTime, Utc};
use std::io;
use std::path::Path;

/// Metadatos leídos en el momento del escaneo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub size: u64,
    pub modified: DateTime<Utc>,
}

pub trait RecordingSource {
    /// Ubicación mostrada en los errores.
    fn location(&self) -> &Path;

    fn list_entries(&self) -> io::Result<Vec<String>>;

    fn stat(&self, name: &str) -> io::Result<FileStat>;
}
