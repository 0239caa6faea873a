use std::sync::Arc;

use dotenvy::dotenv;

use opptak::{app, AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = AppConfig::from_env()?;
    let addr = config.listen_addr;

    if !config.storage_path.is_dir() {
        // No es fatal: cada petición mostrará la página de error
        log::warn!(
            "⚠️ El directorio de grabaciones {} no es accesible",
            config.storage_path.display()
        );
    }

    log::info!(
        "📁 Grabaciones en {} (*.{}), umbrales {}-{} bytes, refresco cada {}s",
        config.storage_path.display(),
        config.catalog.pattern.extension(),
        config.catalog.thresholds.min_bytes,
        config.catalog.thresholds.max_bytes,
        config.page.refresh_interval.as_secs()
    );

    let state = Arc::new(AppState::new(config));
    let router = app(state);

    log::info!("🚀 Opptak escuchando en http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
