pub mod api;
pub mod catalog;
pub mod error;
pub mod metrics;
pub mod render;
pub mod state;
pub mod storage;

use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

pub use catalog::{build_catalog, Catalog, CatalogConfig, DateGroup, Health, Recording};
pub use error::{OpptakError, Result};
pub use state::{AppConfig, AppState};

/// Router completo con cabeceras de seguridad y sin caché.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(api::catalog_page))
        .route("/style.css", get(api::style_sheet))
        .route("/api/recordings", get(api::list_recordings))
        .route("/metrics", get(api::metrics_endpoint))
        .route("/:filename", get(api::download_recording))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static("Sat, 26 Jul 1997 05:00:00 GMT"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .with_state(state)
}
