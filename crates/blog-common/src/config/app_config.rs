//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageBackend,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
    /// Upper bound on handling one request; in-flight storage work is
    /// aborted when it elapses
    pub request_timeout_secs: u64,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Empty when the in-memory backend is selected
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
}

/// Which store backs the services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Log output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub json: bool,
}

// Default value functions
fn default_app_name() -> String {
    "blog-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    1
}

fn default_acquire_timeout() -> u64 {
    5
}

fn default_request_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value does not parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage = match lookup("STORAGE_BACKEND") {
            None => StorageBackend::default(),
            Some(s) => match s.to_lowercase().as_str() {
                "postgres" => StorageBackend::Postgres,
                "memory" => StorageBackend::Memory,
                _ => return Err(ConfigError::InvalidValue("STORAGE_BACKEND", s)),
            },
        };

        let url = match (lookup("DATABASE_URL"), storage) {
            (Some(url), _) => url,
            (None, StorageBackend::Memory) => String::new(),
            (None, StorageBackend::Postgres) => return Err(ConfigError::MissingVar("DATABASE_URL")),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: parse_or(&lookup, "API_PORT", default_port)?,
            },
            database: DatabaseConfig {
                url,
                max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: parse_or(&lookup, "DATABASE_MIN_CONNECTIONS", default_min_connections)?,
                acquire_timeout_secs: parse_or(
                    &lookup,
                    "DATABASE_ACQUIRE_TIMEOUT_SECS",
                    default_acquire_timeout,
                )?,
            },
            storage,
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|origin| !origin.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            logging: LoggingConfig {
                json: lookup("LOG_FORMAT").is_some_and(|s| s.eq_ignore_ascii_case("json")),
            },
            request_timeout_secs: parse_or(&lookup, "REQUEST_TIMEOUT_SECS", default_request_timeout)?,
        })
    }

    /// Request timeout as a duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Parse an optional variable, falling back to its default when unset
fn parse_or<F, T>(lookup: &F, key: &'static str, default: fn() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default()),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/blog")]).unwrap();

        assert_eq!(config.app.name, "blog-server");
        assert!(config.app.env.is_development());
        assert_eq!(config.api.address(), "127.0.0.1:8000");
        assert_eq!(config.storage, StorageBackend::Postgres);
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.cors.allowed_origins.is_empty());
        assert!(!config.logging.json);
    }

    #[test]
    fn test_database_url_required_for_postgres() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DATABASE_URL")));

        let config = load(&[("STORAGE_BACKEND", "memory")]).unwrap();
        assert_eq!(config.storage, StorageBackend::Memory);
        assert!(config.database.url.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("STORAGE_BACKEND", "memory"),
            ("APP_ENV", "production"),
            ("API_PORT", "9000"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();

        assert!(config.app.env.is_production());
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.cors.allowed_origins, vec!["http://a.test", "http://b.test"]);
        assert!(config.logging.json);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let err = load(&[("STORAGE_BACKEND", "memory"), ("API_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("API_PORT", _)));

        let err = load(&[("STORAGE_BACKEND", "sqlite")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("STORAGE_BACKEND", _)));
    }
}
