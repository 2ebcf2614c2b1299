//! Doc Agent server entry point.

use std::error::Error;
use std::sync::Arc;

use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use doc_agent::adapters::ai::{GeminiConfig, GeminiProvider};
use doc_agent::adapters::backend::{BackendClientConfig, BackendContextSource};
use doc_agent::adapters::http::{
    app_router, with_server_layers, ApiKeyAuth, DocumentationAppState, HttpLayerOptions,
    SERVICE_NAME,
};
use doc_agent::config::{AppConfig, LogFormat, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let mut gemini = GeminiConfig::new()
        .with_model(&config.gemini.model)
        .with_base_url(&config.gemini.base_url)
        .with_timeout(config.gemini.timeout())
        .with_max_retries(config.gemini.max_retries);
    if let Some(key) = &config.gemini.api_key {
        gemini = gemini.with_api_key(key.expose_secret().as_str());
    }
    if !gemini.is_configured() {
        tracing::warn!("No Gemini API key configured; generation requests will fail");
    }
    let generator = GeminiProvider::new(gemini)?;

    let backend = BackendContextSource::new(
        BackendClientConfig::new(&config.backend.url).with_timeout(config.backend.timeout()),
    )?;

    let auth = ApiKeyAuth::new(&config.auth.api_key_header, config.auth.api_key.clone())?;
    if auth.is_open() {
        tracing::warn!("Agent API key not set; documentation routes are open");
    }

    let state = DocumentationAppState::new(Arc::new(backend), Arc::new(generator));
    let options = HttpLayerOptions {
        cors_origins: config.server.cors_origins_list(),
        request_timeout: config.server.request_timeout(),
    };
    let app = with_server_layers(app_router(state, auth.clone()), &auth, &options);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        service = SERVICE_NAME,
        version = env!("CARGO_PKG_VERSION"),
        addr = %addr,
        environment = ?config.server.environment,
        backend = %config.backend.url,
        model = %config.gemini.model,
        gemini_configured = config.gemini.is_configured(),
        "Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Filter from `RUST_LOG`, else the configured log level.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    match server.log_format {
        LogFormat::Json => registry.with(fmt::layer().json().with_target(true)).init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(false)).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}
