// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use block_explorer::{
    app,
    logging::{self, LoggingConfig},
    state::AppState,
};
use config::{Args, ExplorerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let env_file_loaded = ExplorerConfig::load_env_file(&args.env_file)?;
    let config = ExplorerConfig::from_env()?;

    logging::init(LoggingConfig::from(&config.log))?;

    if env_file_loaded {
        tracing::info!("Loaded environment from {}", args.env_file);
    }

    let bind_address = config.server.bind_address();
    tracing::info!("Log level: {}", config.log.level);
    tracing::info!("DefraDB GraphQL URL: {}", config.graphql.url);
    tracing::info!("GraphQL timeout: {}s", config.graphql.timeout_secs);

    let state = AppState::new(config)?;
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Starting server on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
