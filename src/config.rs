use std::collections::HashMap;
use thiserror::Error;

/// Default on-disk location of the development database.
pub const DEFAULT_DATABASE_PATH: &str = "./checkmate.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub debug: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());

        let debug = match env_map.get("DEBUG").map(|s| s.as_str()).unwrap_or("false") {
            "1" | "true" | "TRUE" | "True" => true,
            "0" | "false" | "FALSE" | "False" => false,
            other => {
                return Err(ConfigError::InvalidValue(
                    "DEBUG".to_string(),
                    format!("must be a boolean, got {}", other),
                ))
            }
        };

        Ok(Config {
            database_path,
            debug,
        })
    }
}
