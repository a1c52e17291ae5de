use std::{sync::Arc, time::Duration};

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use cq_db::PgProgressStore;
use cq_exercises::{Catalog, ProgressionService};
use sqlx::PgPool;

use crate::{
    config::{ApiConfig, Environment},
    progress_store::ProgressBackend,
};

pub type Progression = ProgressionService<ProgressBackend>;

/// Everything the auth extractor and cookie helpers need.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub cookie_domain: Option<String>,
    pub environment: Environment,
}

#[derive(Clone)]
pub struct ApiState {
    pub pool: PgPool,
    pub progression: Arc<Progression>,
    pub auth: AuthConfig,
    pub cookie_key: Key,
    pub bcrypt_cost: u32,
}

impl ApiState {
    /// State backed by PostgreSQL with the progress cache in front.
    pub fn new(config: &ApiConfig, pool: PgPool) -> Self {
        let backend = ProgressBackend::postgres(
            PgProgressStore::new(pool.clone()),
            config.progress_cache_capacity,
            Duration::from_secs(config.progress_cache_ttl_seconds),
        );

        Self::with_backend(config, pool, backend)
    }

    pub fn with_backend(config: &ApiConfig, pool: PgPool, backend: ProgressBackend) -> Self {
        tracing::info!(backend = backend.name(), "Progress store selected");

        Self {
            progression: Arc::new(ProgressionService::new(backend, Catalog::builtin())),
            auth: AuthConfig {
                jwt_secret: config.jwt_secret.clone(),
                jwt_expiry_hours: config.jwt_expiry_hours,
                cookie_domain: config.cookie_domain.clone(),
                environment: config.environment,
            },
            cookie_key: Key::from(config.cookie_secret.as_bytes()),
            bcrypt_cost: config.bcrypt_cost,
            pool,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.progression.catalog()
    }
}

impl FromRef<ApiState> for Key {
    fn from_ref(state: &ApiState) -> Self {
        state.cookie_key.clone()
    }
}

impl FromRef<ApiState> for AuthConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.auth.clone()
    }
}
