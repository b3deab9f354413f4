use thiserror::Error;

/// Errors that abort database setup.
///
/// Every failure here is fatal: setup performs no local recovery, so errors
/// bubble straight up to the binary, which reports them and exits non-zero.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
