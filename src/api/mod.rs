//! Handlers HTTP de Opptak.
//!
//! Cada petición hace un escaneo nuevo del directorio en el pool bloqueante
//! de tokio; no hay caché entre peticiones.

use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use crate::catalog::{build_catalog, Catalog};
use crate::error::{OpptakError, Result};
use crate::metrics;
use crate::render::{render_error_page, CatalogPage, STYLE_CSS};
use crate::state::AppState;

/// Escanea el directorio y actualiza las métricas del escaneo.
pub async fn scan_catalog(state: &Arc<AppState>) -> Result<Catalog> {
    let scan_state = state.clone();
    let started = Instant::now();

    let result = tokio::task::spawn_blocking(move || {
        build_catalog(&scan_state.source, &scan_state.config.catalog)
    })
    .await?;

    metrics::CATALOG_SCANS.inc();
    metrics::CATALOG_SCAN_DURATION.observe(started.elapsed().as_secs_f64());

    match &result {
        Ok(catalog) => {
            metrics::CATALOG_RECORDINGS.set(catalog.total_count as i64);
            metrics::CATALOG_SKIPPED_ENTRIES.inc_by(catalog.skipped as u64);
            log::debug!(
                "📂 Escaneo completo: {} grabaciones en {} días ({} descartadas)",
                catalog.total_count,
                catalog.groups.len(),
                catalog.skipped
            );
        }
        Err(e) => {
            metrics::CATALOG_SCAN_FAILURES.inc();
            log::error!("❌ Error al escanear grabaciones: {}", e);
        }
    }

    result
}

// GET /
pub async fn catalog_page(State(state): State<Arc<AppState>>) -> Response {
    match scan_catalog(&state).await {
        Ok(catalog) => Html(CatalogPage::new(&catalog, &state.config.page).to_html()).into_response(),
        Err(e) => (e.status_code(), Html(render_error_page(&state.config.page))).into_response(),
    }
}

// GET /api/recordings
pub async fn list_recordings(State(state): State<Arc<AppState>>) -> Result<Json<Catalog>> {
    Ok(Json(scan_catalog(&state).await?))
}

// GET /style.css
pub async fn style_sheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}

// GET /metrics
pub async fn metrics_endpoint() -> Response {
    match metrics::gather_metrics() {
        Ok(text) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            text,
        )
            .into_response(),
        Err(e) => {
            log::error!("❌ Error al recopilar métricas: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

// GET /:filename
pub async fn download_recording(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response> {
    // Solo nombres de grabación: cualquier otra ruta es 404
    let Some(full_path) = state.resolver.resolve(&filename) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let file = match File::open(&full_path).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(StatusCode::NOT_FOUND.into_response());
        }
        Err(e) => return Err(OpptakError::Io(e)),
    };
    let metadata = file.metadata().await?;
    if !metadata.is_file() {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    metrics::DOWNLOADS.inc();
    log::info!("⬇️ Descarga: {} ({} bytes)", filename, metadata.len());

    let content_type = match state.config.catalog.pattern.extension() {
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "flac" => "audio/flac",
        "ogg" => "audio/ogg",
        _ => "application/octet-stream",
    };

    let body = Body::from_stream(ReaderStream::new(file));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, metadata.len().to_string())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(body)
        .map_err(|e| OpptakError::Http(e.to_string()))
}
