use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use primo_core::chat::SalesBot;
use primo_db::store::{MemStore, PgStore, Store};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use primo_api::config::ServerConfig;
use primo_api::router::build_app_router;
use primo_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "primo_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        seed_endpoint = config.enable_seed_endpoint,
        "Loaded server configuration"
    );

    // --- Storage ---
    let store: Arc<dyn Store> = match &config.database_url {
        Some(database_url) => {
            let pool = primo_db::create_pool(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connection pool created");

            primo_db::health_check(&pool)
                .await
                .context("Database health check failed")?;

            primo_db::run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            Arc::new(PgStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory storage (data is not persisted)");
            Arc::new(MemStore::new())
        }
    };

    // --- App state ---
    let state = AppState {
        store,
        responder: Arc::new(SalesBot::new()),
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let host: IpAddr = config.host.parse().context("Invalid HOST address")?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
