//! Operaciones de sistema de archivos.
//!
//! Listado del directorio de grabaciones y lectura de metadatos con `std::fs`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::storage::{FileStat, RecordingSource};

/// Fuente de grabaciones respaldada por un directorio plano.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl RecordingSource for DirectorySource {
    fn location(&self) -> &Path {
        &self.root
    }

    fn list_entries(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            match entry {
                Ok(entry) => match entry.file_name().into_string() {
                    Ok(name) => names.push(name),
                    Err(raw) => {
                        log::debug!("filesystem: skipping non UTF-8 entry {:?}", raw);
                    }
                },
                Err(e) => {
                    log::warn!(
                        "filesystem: failed to read dir entry in {}: {}",
                        self.root.display(),
                        e
                    );
                }
            }
        }

        Ok(names)
    }

    fn stat(&self, name: &str) -> io::Result<FileStat> {
        let metadata = fs::metadata(self.root.join(name))?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", name),
            ));
        }

        let modified = match metadata.modified() {
            Ok(modified) => modified,
            Err(e) => {
                log::debug!("filesystem: no modification time for {}: {}", name, e);
                std::time::UNIX_EPOCH
            }
        };

        Ok(FileStat {
            size: metadata.len(),
            modified: DateTime::<Utc>::from(modified),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn lists_and_stats_files() {
        let tmp = TempDir::new().unwrap();
        let mut f = File::create(tmp.path().join("2024-06-01_0600.wav")).unwrap();
        f.write_all(&[0u8; 2048]).unwrap();
        f.sync_all().unwrap();
        fs::create_dir(tmp.path().join("2024-06-01_0800.wav")).unwrap();

        let source = DirectorySource::new(tmp.path());
        let mut names = source.list_entries().unwrap();
        names.sort();
        assert_eq!(names, vec!["2024-06-01_0600.wav", "2024-06-01_0800.wav"]);

        let stat = source.stat("2024-06-01_0600.wav").unwrap();
        assert_eq!(stat.size, 2048);
        // mtime real, no el valor de respaldo
        assert!(stat.modified > DateTime::<Utc>::from(std::time::UNIX_EPOCH));

        // Un directorio con nombre de grabación no es un archivo
        assert!(source.stat("2024-06-01_0800.wav").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let source = DirectorySource::new(tmp.path());
        let err = source.stat("2024-06-01_0600.wav").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn missing_directory_fails_listing() {
        let tmp = TempDir::new().unwrap();
        let source = DirectorySource::new(tmp.path().join("nope"));
        assert!(source.list_entries().is_err());
        assert_eq!(source.location(), tmp.path().join("nope").as_path());
    }
}
