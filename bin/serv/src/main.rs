use std::net::SocketAddr;

use cq_api::{config::ApiConfig, state::ApiState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    cq_api::tracing::init_tracing(config.environment);
    let metrics_handle = cq_api::metrics::init_metrics()?;

    let pool = cq_db::create_pool(&config.database_url, config.db_max_connections).await?;
    cq_db::ensure_db_and_migrate(&config.database_url, &pool).await?;
    tracing::info!("Database ready");

    let state = ApiState::new(&config, pool);
    let app = cq_api::router::app(state, &config, Some(metrics_handle));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, environment = ?config.environment, "Server listening");

    // Peer addresses are the rate limiter's fallback key
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
