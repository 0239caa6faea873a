//! Resolución y validación de rutas de descarga.
//!
//! Solo expone archivos cuyo nombre pasa el mismo patrón que el catálogo,
//! así la descarga nunca sale del directorio raíz.

use std::path::PathBuf;

use crate::catalog::FilenamePattern;

#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
    pattern: FilenamePattern,
}

impl PathResolver {
    pub fn new(root: PathBuf, pattern: FilenamePattern) -> Self {
        Self { root, pattern }
    }

    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        if self.pattern.is_valid(filename) {
            Some(self.root.join(filename))
        } else {
            None
        }
    }
}
