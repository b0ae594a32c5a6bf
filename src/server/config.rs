use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub struct Config {
    pub database_url: String,

    /// Public base URL, used for links printed in the log.
    pub app_url: String,
    pub host: String,
    pub port: u16,

    /// Directory holding the files of file messages.
    pub upload_dir: String,
    pub max_upload_bytes: usize,

    /// Allowed browser origin; no CORS layer is installed when unset.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_url: var_or("APP_URL", DEFAULT_APP_URL)
                .trim_end_matches('/')
                .to_string(),
            host: var_or("HOST", DEFAULT_HOST),
            port: parse_var("PORT", DEFAULT_PORT)?,
            upload_dir: var_or("UPLOAD_DIR", DEFAULT_UPLOAD_DIR),
            max_upload_bytes: parse_var("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            cors_origin: std::env::var("CORS_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
        })
    }

    /// Socket address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
