use serde::Deserialize;
use thiserror::Error;

/// Deployment environment, read from `ENVIRONMENT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Env(#[from] envy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Service configuration.
///
/// Every field maps to the upper-cased environment variable of the same name
/// (`DATABASE_URL`, `JWT_SECRET`, ...). Comma-separated values are accepted
/// for `ALLOWED_ORIGINS`.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub database_url: String,
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,
    pub jwt_secret: String,
    #[serde(default = "default_jwt_expiry_hours")]
    pub jwt_expiry_hours: i64,
    /// Key material for the private cookie jar, at least 64 bytes.
    pub cookie_secret: String,
    pub cookie_domain: Option<String>,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_cache_capacity")]
    pub progress_cache_capacity: u64,
    #[serde(default = "default_cache_ttl_seconds")]
    pub progress_cache_ttl_seconds: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_db_max_connections() -> u32 {
    10
}

const fn default_jwt_expiry_hours() -> i64 {
    24
}

const fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

const fn default_cache_capacity() -> u64 {
    10_000
}

const fn default_cache_ttl_seconds() -> u64 {
    300
}

/// Keys read from the Shuttle secret store.
#[cfg(feature = "shuttle")]
const SECRET_KEYS: &[&str] = &[
    "ENVIRONMENT",
    "DATABASE_URL",
    "DB_MAX_CONNECTIONS",
    "JWT_SECRET",
    "JWT_EXPIRY_HOURS",
    "COOKIE_SECRET",
    "COOKIE_DOMAIN",
    "BCRYPT_COST",
    "ALLOWED_ORIGINS",
    "PROGRESS_CACHE_CAPACITY",
    "PROGRESS_CACHE_TTL_SECONDS",
];

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: Self = envy::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the configuration from Shuttle secrets. The database URL is
    /// provided by Shuttle itself, so a placeholder is accepted.
    #[cfg(feature = "shuttle")]
    pub fn from_shuttle_secrets(
        secrets: &shuttle_runtime::SecretStore,
    ) -> Result<Self, ConfigError> {
        let mut vars: Vec<(String, String)> = SECRET_KEYS
            .iter()
            .filter_map(|key| secrets.get(key).map(|value| (key.to_string(), value)))
            .collect();

        if !vars.iter().any(|(key, _)| key == "DATABASE_URL") {
            vars.push(("DATABASE_URL".to_string(), "shuttle".to_string()));
        }

        let config: Self = envy::from_iter(vars)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.len() < 32 {
            return Err(ConfigError::Invalid(
                "JWT_SECRET must be at least 32 characters long".to_string(),
            ));
        }

        if self.cookie_secret.len() < 64 {
            return Err(ConfigError::Invalid(
                "COOKIE_SECRET must be at least 64 characters long".to_string(),
            ));
        }

        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::Invalid(
                "BCRYPT_COST must be between 4 and 31".to_string(),
            ));
        }

        if self.jwt_expiry_hours <= 0 {
            return Err(ConfigError::Invalid(
                "JWT_EXPIRY_HOURS must be positive".to_string(),
            ));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(extra: &[(&str, &str)]) -> Vec<(String, String)> {
        let mut vars = vec![
            ("DATABASE_URL", "postgres://localhost/codequest"),
            ("JWT_SECRET", "test_jwt_secret_minimum_32_characters_long"),
            (
                "COOKIE_SECRET",
                "test_cookie_secret_minimum_64_characters_long_for_secure_encryption",
            ),
        ];
        vars.extend_from_slice(extra);
        vars.into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_are_applied() {
        let config: ApiConfig = envy::from_iter(vars(&[])).unwrap();
        assert!(config.validate().is_ok());

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.jwt_expiry_hours, 24);
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.progress_cache_ttl_seconds, 300);
        assert!(config.cookie_domain.is_none());
    }

    #[test]
    fn test_overrides_and_origin_list() {
        let config: ApiConfig = envy::from_iter(vars(&[
            ("ENVIRONMENT", "production"),
            ("PORT", "8080"),
            (
                "ALLOWED_ORIGINS",
                "https://codequest.dev,https://www.codequest.dev",
            ),
        ]))
        .unwrap();

        assert!(config.environment.is_production());
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.allowed_origins,
            vec!["https://codequest.dev", "https://www.codequest.dev"]
        );
    }

    #[test]
    fn test_short_secrets_are_rejected() {
        let config: ApiConfig = envy::from_iter(vars(&[("JWT_SECRET", "short")])).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config: ApiConfig = envy::from_iter(vars(&[("COOKIE_SECRET", "short")])).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_required_variable() {
        let result: Result<ApiConfig, _> =
            envy::from_iter(vec![("JWT_SECRET".to_string(), "x".repeat(40))]);
        assert!(result.is_err());
    }
}
