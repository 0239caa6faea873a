//! Configuración y estado compartido de la aplicación.
//!
//! Todo se fija al arrancar a partir de variables de entorno (con soporte
//! de `.env`) y no cambia en tiempo de ejecución.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::{CatalogConfig, FilenamePattern, HealthThresholds, MIB};
use crate::error::{OpptakError, Result};
use crate::storage::{DirectorySource, PathResolver};

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_REFRESH_SECS: u64 = 300;

/// Textos de presentación
#[derive(Clone, Debug)]
pub struct PageConfig {
    pub title: String,
    pub station: String,
    pub refresh_interval: Duration,
    pub retention_hours: u32,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub storage_path: PathBuf,
    pub listen_addr: SocketAddr,
    pub catalog: CatalogConfig,
    pub page: PageConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| -> String {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let storage_path = PathBuf::from(get("RECORDINGS_DIR", "."));

        let listen_addr: SocketAddr = get("LISTEN_ADDR", DEFAULT_LISTEN_ADDR)
            .parse()
            .map_err(|e| OpptakError::Config(format!("LISTEN_ADDR: {}", e)))?;

        let pattern = FilenamePattern::new(&get("RECORDING_EXTENSION", "wav"))?;

        let min_mb: u64 = parse_number("MIN_FILE_SIZE_MB", &get("MIN_FILE_SIZE_MB", "100"))?;
        let max_mb: u64 = parse_number("MAX_FILE_SIZE_MB", &get("MAX_FILE_SIZE_MB", "1500"))?;
        let thresholds = HealthThresholds::new(
            min_mb.saturating_mul(MIB),
            max_mb.saturating_mul(MIB),
        )?;

        let refresh_secs: u64 = parse_number(
            "REFRESH_INTERVAL_SECS",
            &get("REFRESH_INTERVAL_SECS", &DEFAULT_REFRESH_SECS.to_string()),
        )?;
        if refresh_secs == 0 {
            return Err(OpptakError::Config(
                "REFRESH_INTERVAL_SECS must be greater than zero".to_string(),
            ));
        }

        let retention_hours: u32 = parse_number("RETENTION_HOURS", &get("RETENTION_HOURS", "48"))?;

        Ok(Self {
            storage_path,
            listen_addr,
            catalog: CatalogConfig {
                pattern,
                thresholds,
            },
            page: PageConfig {
                title: get("PAGE_TITLE", "Idar Opptak"),
                station: get("STATION_NAME", "Radio Nova"),
                refresh_interval: Duration::from_secs(refresh_secs),
                retention_hours,
            },
        })
    }
}

fn parse_number<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|e| OpptakError::Config(format!("{}={:?}: {}", key, raw, e)))
}

/// Estado inmutable compartido por los handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub source: DirectorySource,
    pub resolver: PathResolver,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let source = DirectorySource::new(config.storage_path.clone());
        let resolver = PathResolver::new(config.storage_path.clone(), config.catalog.pattern.clone());
        Self {
            config,
            source,
            resolver,
        }
    }
}
