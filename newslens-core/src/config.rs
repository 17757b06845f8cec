//! Environment configuration

use std::time::Duration;

/// Environment variable supplying the predictor base URL
pub const BACKEND_URL_VAR: &str = "NEWSLENS_BACKEND_URL";
/// Environment variable overriding the result reveal delay (milliseconds)
pub const REVEAL_DELAY_VAR: &str = "NEWSLENS_REVEAL_DELAY_MS";

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_REVEAL_DELAY_MS: u64 = 2000;

/// Predictor connection settings
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    /// Base URL of the prediction service (no trailing slash)
    pub base_url: String,
    /// Cosmetic pause between receiving a result and revealing it, so the
    /// loading animation gets to play. Zero disables it.
    pub reveal_delay: Duration,
}

impl PredictorConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BACKEND_URL_VAR)
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let reveal_delay_ms = match std::env::var(REVEAL_DELAY_VAR) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("{REVEAL_DELAY_VAR} is not a number, using default");
                DEFAULT_REVEAL_DELAY_MS
            }),
            Err(_) => DEFAULT_REVEAL_DELAY_MS,
        };

        Self {
            base_url,
            reveal_delay: Duration::from_millis(reveal_delay_ms),
        }
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PredictorConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.reveal_delay, Duration::from_millis(2000));
    }
}
