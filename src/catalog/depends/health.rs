//! Clasificación de salud por tamaño de archivo.
//!
//! Una grabación muy pequeña suele estar truncada y una muy grande suele
//! indicar que el proceso de captura no se cortó a tiempo.

use serde::Serialize;

use crate::error::{OpptakError, Result};

pub const MIB: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    Small,
    Large,
    Ok,
}

impl Health {
    pub fn is_ok(&self) -> bool {
        matches!(self, Health::Ok)
    }
}

/// Límites de tamaño esperados, ambos inclusivos del lado "ok".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthThresholds {
    pub min_bytes: u64,
    pub max_bytes: u64,
}

impl HealthThresholds {
    pub fn new(min_bytes: u64, max_bytes: u64) -> Result<Self> {
        if min_bytes > max_bytes {
            return Err(OpptakError::Config(format!(
                "minimum file size ({} bytes) exceeds maximum ({} bytes)",
                min_bytes, max_bytes
            )));
        }
        Ok(Self {
            min_bytes,
            max_bytes,
        })
    }

    pub fn classify(&self, size: u64) -> Health {
        if size < self.min_bytes {
            Health::Small
        } else if size > self.max_bytes {
            Health::Large
        } else {
            Health::Ok
        }
    }
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            min_bytes: 100 * MIB,
            max_bytes: 1500 * MIB,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_against_default_thresholds() {
        let thresholds = HealthThresholds::default();
        assert_eq!(thresholds.classify(50 * MIB), Health::Small);
        assert_eq!(thresholds.classify(800 * MIB), Health::Ok);
        assert_eq!(thresholds.classify(2048 * MIB), Health::Large);
    }

    #[test]
    fn bounds_are_ok() {
        let thresholds = HealthThresholds::new(10, 20).unwrap();
        assert_eq!(thresholds.classify(9), Health::Small);
        assert_eq!(thresholds.classify(10), Health::Ok);
        assert_eq!(thresholds.classify(20), Health::Ok);
        assert_eq!(thresholds.classify(21), Health::Large);
        assert_eq!(thresholds.classify(0), Health::Small);
    }

    #[test]
    fn rejects_inverted_thresholds() {
        assert!(matches!(
            HealthThresholds::new(20, 10),
            Err(OpptakError::Config(_))
        ));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Health::Large).unwrap(), "\"large\"");
        assert!(Health::Ok.is_ok());
    }
}
