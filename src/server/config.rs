use axum::http::HeaderValue;

use crate::server::error::{config::ConfigError, AppError};

const DEVELOPMENT_PORT: u16 = 3000;
const PRODUCTION_PORT: u16 = 5000;

/// Deployment environment selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidEnvVar {
                name: "APP_ENV".to_string(),
                value: value.to_string(),
                reason: "expected 'development' or 'production'".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    /// Shared secret a caller must present to register an admin.
    pub credentials: String,

    pub environment: Environment,
    pub port: u16,

    /// `None` allows any origin.
    pub cors_origin: Option<HeaderValue>,

    pub app_name: String,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|key| std::env::var(key).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let environment = match lookup("APP_ENV") {
            Some(value) => Environment::parse(&value)?,
            None => Environment::Development,
        };

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value: value.clone(),
                reason: "expected a port number".to_string(),
            })?,
            None => match environment {
                Environment::Development => DEVELOPMENT_PORT,
                Environment::Production => PRODUCTION_PORT,
            },
        };

        let cors_origin = match lookup("CORS_ORIGIN") {
            Some(origin) if origin.trim() != "*" && !origin.trim().is_empty() => Some(
                HeaderValue::from_str(origin.trim()).map_err(|e| ConfigError::InvalidEnvVar {
                    name: "CORS_ORIGIN".to_string(),
                    value: origin.clone(),
                    reason: e.to_string(),
                })?,
            ),
            _ => None,
        };

        let (app_name, log_level) = match environment {
            Environment::Development => ("HemoSync [DEV]", "debug"),
            Environment::Production => ("HemoSync API", "error"),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            credentials: required("CREDENTIALS")?,
            environment,
            port,
            cors_origin,
            app_name: app_name.to_string(),
            log_level: log_level.to_string(),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Per-request tracing is enabled outside production.
    pub fn debug(&self) -> bool {
        !self.is_production()
    }

    /// Minimal configuration used by tests that don't read the environment.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: "test-secret".to_string(),
            credentials: "let-me-in".to_string(),
            environment: Environment::Development,
            port: DEVELOPMENT_PORT,
            cors_origin: None,
            app_name: "HemoSync [TEST]".to_string(),
            log_level: "debug".to_string(),
        }
    }
}
