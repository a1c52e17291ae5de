use cq_api::{config::ApiConfig, state::ApiState};

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: sqlx::PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    let config = ApiConfig::from_shuttle_secrets(&secrets)
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;

    // Shuttle installs its own tracing subscriber
    let metrics_handle = cq_api::metrics::init_metrics()?;

    cq_db::migrate(&pool).await?;
    tracing::info!("Migrations applied");

    let state = ApiState::new(&config, pool);
    let app = cq_api::router::app(state, &config, Some(metrics_handle));

    tracing::info!(environment = ?config.environment, "Codequest API ready");
    Ok(app.into())
}
