mod app_state;
mod config;
mod error;
mod normalize;
mod ollama;
mod prompt;
mod routes;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app_state::AppState;
use config::Config;
use ollama::OllamaClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignored silently if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "profesor_bridge=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let (notes, source) = prompt::load_notes(config.topic_notes.as_deref(), &config.notes_file);
    let system_prompt = prompt::build_system_prompt(&config.topic_name, &notes);
    tracing::info!(?source, topic = %config.topic_name, chars = system_prompt.len(), "System prompt assembled");

    // One pooled client for the process; every call shares its timeout.
    let ollama = OllamaClient::new(&config)?;

    // Readiness does not wait on the model load.
    tokio::spawn({
        let ollama = ollama.clone();
        async move { ollama.warmup().await }
    });

    let addr: SocketAddr = config.addr().parse().context("Invalid bind address")?;
    let state = Arc::new(AppState::new(config, system_prompt, Some(ollama)));
    let app = routes::router(state);

    tracing::info!("profesor-bridge listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received, stopping");
}
