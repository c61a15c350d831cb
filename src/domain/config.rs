//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ENDPOINT, FETCH_TIMEOUT_SECS};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Roster API configuration
    pub api: ApiConfig,
}

/// Roster API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint returning `{ "users": [...] }`
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: FETCH_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_public_endpoint() {
        let config = AppConfig::default();
        assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.api.timeout_secs, FETCH_TIMEOUT_SECS);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig {
            api: ApiConfig {
                endpoint: "http://localhost:9000/users".to_string(),
                timeout_secs: 5,
            },
        };
        let text = toml::to_string(&config).expect("serialize");
        let back: AppConfig = toml::from_str(&text).expect("parse");
        assert_eq!(back.api.endpoint, "http://localhost:9000/users");
        assert_eq!(back.api.timeout_secs, 5);
    }
}
