// src/main.rs

use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use lucid_backend::api::http::build_router;
use lucid_backend::config::CONFIG;
use lucid_backend::state::AppState;
use tower_http::cors::{Any, CorsLayer};

/// Graceful shutdown signal handler for SIGTERM and Ctrl+C
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Lucid Backend");
    info!("Simplifier mode: {:?}", CONFIG.simplifier.mode);

    let app_state = Arc::new(AppState::new()?);
    if app_state.classifier.is_degraded() {
        info!("Complexity classifier running in degraded (heuristic) mode");
    }

    // Browser frontends talk to this directly, so CORS stays wide open
    let app = build_router()
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state);

    let bind_address = CONFIG.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Listening on http://{}", bind_address);
    info!("Endpoints: POST /process_text, GET /health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");

    Ok(())
}
