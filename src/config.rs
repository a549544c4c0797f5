//! Configuration module

use std::env;

use crate::prediction_client::ClientConfig;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Prediction service base URL (including `/api`)
    pub prediction_api_url: String,

    /// Prediction service request timeout in seconds
    pub prediction_timeout_secs: u64,

    /// Origins allowed by CORS
    pub allowed_origins: Vec<String>,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            prediction_api_url: lookup("PREDICTION_API_URL")
                .unwrap_or_else(|| "http://localhost:8000/api".to_string()),

            prediction_timeout_secs: lookup("PREDICTION_TIMEOUT_SECS")
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),

            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|o| parse_origins(&o))
                .unwrap_or_else(|| vec![
                    "http://localhost:3000".to_string(),
                    "http://127.0.0.1:3000".to_string(),
                ]),

            environment: lookup("ENVIRONMENT")
                .unwrap_or_else(|| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.prediction_api_url.clone(),
            timeout_seconds: self.prediction_timeout_secs,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.prediction_api_url, "http://localhost:8000/api");
        assert_eq!(config.prediction_timeout_secs, 30);
        assert_eq!(config.allowed_origins.len(), 2);
        assert!(!config.is_production());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("PREDICTION_API_URL", "http://model:8000/api"),
            ("PREDICTION_TIMEOUT_SECS", "5"),
            ("ALLOWED_ORIGINS", "https://a.example, ,https://b.example"),
            ("ENVIRONMENT", "production"),
        ]);
        assert_eq!(config.port, 9000);
        assert_eq!(config.client_config().base_url, "http://model:8000/api");
        assert_eq!(config.client_config().timeout_seconds, 5);
        assert_eq!(config.allowed_origins, vec!["https://a.example", "https://b.example"]);
        assert!(config.is_production());
    }

    #[test]
    fn test_unparseable_numbers_fall_back() {
        let config = config_from(&[("PORT", "eighty"), ("PREDICTION_TIMEOUT_SECS", "-1")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.prediction_timeout_secs, 30);
    }
}
