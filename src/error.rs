//! Tipos de error personalizados para Opptak.
//!
//! Distingue explícitamente "no se puede leer el directorio de grabaciones"
//! de "no hay grabaciones todavía", que no es un error.

use std::fmt;
use std::path::PathBuf;

/// Error principal de la aplicación
#[derive(Debug)]
pub enum OpptakError {
    /// Errores de configuración
    Config(String),
    /// El directorio de grabaciones no se pudo listar
    StorageUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Errores de I/O
    Io(std::io::Error),
    /// Errores HTTP
    Http(String),
    /// Errores genéricos
    Other(String),
}

impl fmt::Display for OpptakError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpptakError::Config(msg) => write!(f, "Config error: {}", msg),
            OpptakError::StorageUnavailable { path, source } => write!(
                f,
                "Storage unavailable: cannot read {}: {}",
                path.display(),
                source
            ),
            OpptakError::Io(err) => write!(f, "IO error: {}", err),
            OpptakError::Http(msg) => write!(f, "HTTP error: {}", msg),
            OpptakError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for OpptakError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OpptakError::StorageUnavailable { source, .. } => Some(source),
            OpptakError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OpptakError {
    fn from(err: std::io::Error) -> Self {
        OpptakError::Io(err)
    }
}

impl From<regex::Error> for OpptakError {
    fn from(err: regex::Error) -> Self {
        OpptakError::Config(format!("invalid filename pattern: {}", err))
    }
}

impl From<tokio::task::JoinError> for OpptakError {
    fn from(err: tokio::task::JoinError) -> Self {
        OpptakError::Other(format!("scan task failed: {}", err))
    }
}

impl OpptakError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        match self {
            OpptakError::Config(_)
            | OpptakError::StorageUnavailable { .. }
            | OpptakError::Io(_)
            | OpptakError::Http(_)
            | OpptakError::Other(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl axum::response::IntoResponse for OpptakError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = serde_json::json!({ "error": self.to_string() });

        (status, axum::Json(body)).into_response()
    }
}

/// Result type alias para simplificar el código
pub type Result<T> = std::result::Result<T, OpptakError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_opptak_error_display() {
        let err = OpptakError::Config("bad threshold".to_string());
        assert_eq!(format!("{}", err), "Config error: bad threshold");

        let err = OpptakError::StorageUnavailable {
            path: PathBuf::from("/srv/opptak"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            format!("{}", err),
            "Storage unavailable: cannot read /srv/opptak: denied"
        );
    }

    #[test]
    fn test_error_from_conversions() {
        let err: OpptakError = regex::Regex::new("(").unwrap_err().into();
        assert!(matches!(err, OpptakError::Config(_)));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: OpptakError = io_err.into();
        assert!(matches!(err, OpptakError::Io(_)));
    }

    #[test]
    fn test_storage_unavailable_is_server_error() {
        let err = OpptakError::StorageUnavailable {
            path: PathBuf::from("/missing"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let response = err.into_response();
        assert_eq!(
            response.status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_is_error_trait() {
        let err = OpptakError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        let error: &dyn std::error::Error = &err;
        assert!(error.source().is_some());
    }
}
