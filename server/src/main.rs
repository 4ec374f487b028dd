use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use todo_server::{
    config::{Cli, Config},
    openapi, store, telemetry, AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::try_from(Cli::parse()).context("invalid configuration")?;
    telemetry::init(&config.logging)?;

    let database_url = config.redacted_database_url();
    let pool = store::connect(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("failed to open store at {database_url}"))?;
    store::init_schema(&pool)
        .await
        .context("failed to prepare todos table")?;

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(addr = %config.listen_addr, %database_url, api_docs = config.api_docs, "listening");

    let mut router = todo_server::app(AppState::new(pool.clone()));
    if config.api_docs {
        router = openapi::with_docs(router);
    }
    todo_server::run(listener, router, shutdown_signal()).await?;

    pool.close().await;
    info!("shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to register SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received ctrl-c, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
