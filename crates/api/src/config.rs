use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use comicstore_db::PoolConfig;

/// Invalid or missing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Root of the statically served tree (default: `public`).
    pub public_dir: PathBuf,
    /// URL prefix of uploaded images below the public root (default: `/img/`).
    pub upload_dir: String,
    /// Largest accepted request body in bytes (default: 10 MiB).
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:3000` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `PUBLIC_DIR`           | `public`                |
    /// | `UPLOAD_DIR`           | `/img/`                 |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`              |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_env("PORT", 3000)?;

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin.parse().map_err(|_| ConfigError::Invalid {
                    key: "CORS_ORIGINS",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", 30)?;
        let public_dir = std::env::var("PUBLIC_DIR")
            .unwrap_or_else(|_| "public".into())
            .into();
        let upload_dir = normalize_upload_dir(
            &std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "/img/".into()),
        );
        let max_upload_bytes = parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            public_dir,
            upload_dir,
            max_upload_bytes,
        })
    }

    /// Filesystem directory uploads are written to.
    pub fn upload_path(&self) -> PathBuf {
        self.public_dir.join(self.upload_dir.trim_matches('/'))
    }
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool: PoolConfig,
}

impl DatabaseConfig {
    /// | Env Var                | Default  |
    /// |------------------------|----------|
    /// | `DATABASE_URL`         | required |
    /// | `DB_MAX_CONNECTIONS`   | `5`      |
    /// | `DB_MIN_CONNECTIONS`   | `0`      |
    /// | `DB_IDLE_TIMEOUT_SECS` | `10`     |
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let defaults = PoolConfig::default();

        let pool = PoolConfig {
            max_connections: parse_env("DB_MAX_CONNECTIONS", defaults.max_connections)?,
            min_connections: parse_env("DB_MIN_CONNECTIONS", defaults.min_connections)?,
            idle_timeout: Duration::from_secs(parse_env(
                "DB_IDLE_TIMEOUT_SECS",
                defaults.idle_timeout.as_secs(),
            )?),
        };

        Ok(Self { url, pool })
    }
}

fn parse_env<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}

/// Force a single leading and trailing slash: `img` becomes `/img/`.
fn normalize_upload_dir(raw: &str) -> String {
    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}
