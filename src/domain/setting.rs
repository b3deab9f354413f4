//! System settings rows seeded at setup time.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A single system-wide configuration row.
///
/// Values are free-form JSON documents; the application reads and mutates
/// them after setup. This crate only inserts the initial set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSetting {
    /// Unique key identifying the setting.
    pub setting_key: String,
    /// JSON payload for the setting.
    pub setting_value: Value,
    /// Human-readable description.
    pub description: String,
}

impl SystemSetting {
    pub fn new(key: &str, value: Value, description: &str) -> Self {
        SystemSetting {
            setting_key: key.to_string(),
            setting_value: value,
            description: description.to_string(),
        }
    }
}

/// The fixed set of settings inserted on first setup.
pub fn default_settings() -> Vec<SystemSetting> {
    vec![
        SystemSetting::new(
            "max_tokens_per_request",
            json!({"value": 2000}),
            "Maximum tokens allowed per AI request",
        ),
        SystemSetting::new(
            "rate_limit_per_minute",
            json!({"value": 60}),
            "API requests per minute per user",
        ),
        SystemSetting::new(
            "external_apis_enabled",
            json!({
                "brave_search": true,
                "binance": true,
                "groq": true,
            }),
            "Enabled external APIs",
        ),
        SystemSetting::new(
            "default_ai_model",
            json!({"value": "groq-llama-3.1-70b"}),
            "Default AI model for new users",
        ),
    ]
}
