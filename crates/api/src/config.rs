use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Default maximum accepted upload size (10 MiB).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Which storage backend the server runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// PostgreSQL at the given connection URL.
    Postgres { database_url: String },
    /// JSON files under the given directory.
    File { data_dir: PathBuf },
}

impl StorageConfig {
    /// Resolve the backend from `STORAGE_BACKEND`, `DATABASE_URL` and `DATA_DIR`.
    ///
    /// Without an explicit `STORAGE_BACKEND`, PostgreSQL is used when
    /// `DATABASE_URL` is set and the flat-file store otherwise.
    ///
    /// # Panics
    ///
    /// Panics on an unknown backend name, or if `postgres` is selected
    /// without a `DATABASE_URL`.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.is_empty());
        let data_dir = PathBuf::from(std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()));

        let backend = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| {
            if database_url.is_some() {
                "postgres".into()
            } else {
                "file".into()
            }
        });

        match backend.as_str() {
            "postgres" => StorageConfig::Postgres {
                database_url: database_url
                    .expect("DATABASE_URL must be set when STORAGE_BACKEND=postgres"),
            },
            "file" => StorageConfig::File { data_dir },
            other => panic!("STORAGE_BACKEND must be 'postgres' or 'file', got '{other}'"),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Largest accepted image upload in bytes.
    pub max_upload_bytes: usize,
    pub storage: StorageConfig,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                 |
    ///
    /// See [`StorageConfig::from_env`] and [`JwtConfig::from_env`] for the
    /// remaining variables.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            storage: StorageConfig::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
