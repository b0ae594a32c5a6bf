use thiserror::Error;

/// Problems reading the server's environment at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable with no default (only `DATABASE_URL`) is unset.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A variable is set but its value doesn't parse, e.g. `PORT=eighty`.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },
}
