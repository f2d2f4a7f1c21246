use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use document_client::DocumentClient;
use document_gateway::{build_router, AppState, GatewayConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("document_gateway=info,document_client=info")),
        )
        .init();

    let config = GatewayConfig::from_env()?;

    let state = Arc::new(AppState {
        documents: DocumentClient::new(&config.downstream_base_url)?,
    });
    let app = build_router(state);

    let addr = config.bind_addr();
    info!(downstream = %config.downstream_base_url, "Document gateway starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Document gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
