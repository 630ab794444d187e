//! Receipt processor HTTP API server.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::signal;
use tower_http::trace::TraceLayer;

use receipt_processor::server::{AppState, Config, init_logging, router};

/// Receipt processor HTTP API server.
#[derive(Parser, Debug)]
#[command(name = "receipt-processor-server")]
#[command(about = "HTTP API server that scores purchase receipts")]
struct Args {
    /// Path to the configuration file (built-in defaults when omitted).
    #[arg(short, long, env = "RECEIPT_PROCESSOR_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration first (needed for logging setup)
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_logging(&config.logging)?;

    tracing::info!("Starting receipt processor");

    let app = router(AppState::new()).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.bind_addr().parse()?;

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
