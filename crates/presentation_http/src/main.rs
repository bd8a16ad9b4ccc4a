//! PriceScout HTTP Server
//!
//! Main entry point for the product search server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::ProductSearchService;
use infrastructure::{AppConfig, EnvSecretStore, ShoppingSearchAdapter, init_tracing};
use presentation_http::{RequestIdLayer, cors_layer, routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Default `RUST_LOG` directives
const DEFAULT_LOG_FILTER: &str = "price_scout_server=debug,presentation_http=debug,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let mut config = AppConfig::load().context("failed to load configuration")?;

    // Initialize tracing
    init_tracing(config.server.log_format, DEFAULT_LOG_FILTER)
        .context("failed to initialize tracing")?;

    info!("PriceScout v{} starting...", env!("CARGO_PKG_VERSION"));

    config
        .resolve_secrets(&EnvSecretStore::new())
        .await
        .context("failed to resolve secrets")?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        log_format = %config.server.log_format,
        serpapi = ?config.serpapi,
        "Configuration loaded"
    );

    // Initialize provider adapter and service
    let adapter = ShoppingSearchAdapter::new(&config.serpapi.to_serpapi_config())
        .context("failed to initialize shopping search adapter")?;
    let search_service = Arc::new(ProductSearchService::new(Arc::new(adapter)));

    if !search_service.is_configured() {
        warn!("No SerpApi API key configured; set SERP_API_KEY to enable searches");
    }

    // Build router
    let app = routes::create_router(AppState::new(search_service))
        .layer(cors_layer(&config.server.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new());

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    // Force exit if in-flight requests outlive the grace period
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        warn!(?timeout, "Graceful shutdown timed out, exiting");
        std::process::exit(1);
    });
}
