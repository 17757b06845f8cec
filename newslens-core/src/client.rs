//! Predictor service HTTP client

use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::config::PredictorConfig;
use crate::error::{CoreError, CoreResult};
use crate::types::{PredictionRequest, PredictionResponse};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client for the external prediction service
#[derive(Debug, Clone)]
pub struct PredictorClient {
    http: Client,
    base_url: String,
}

impl PredictorClient {
    /// Create a client for the configured predictor endpoint.
    ///
    /// Fails if the underlying HTTP client cannot be constructed; the
    /// request timeout is never silently dropped.
    pub fn new(config: &PredictorConfig) -> CoreResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| CoreError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Submit news text for classification.
    ///
    /// Issues a single `POST {base_url}/predict` with body `{"text": ...}`.
    /// Non-2xx statuses map to [`CoreError::Transport`], connectivity
    /// failures to [`CoreError::Network`], and contract-violating bodies to
    /// [`CoreError::Parse`].
    pub async fn predict(&self, text: &str) -> CoreResult<PredictionResponse> {
        let url = format!("{}/predict", self.base_url);
        debug!("POST {url}");

        let request = PredictionRequest {
            text: text.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| CoreError::Network(format!("Prediction request failed: {e}")))?;

        let status = response.status();
        debug!("Response Status: {status}");

        if !status.is_success() {
            log::warn!("Predictor returned {status} for {url}");
            return Err(CoreError::Transport(status.as_u16()));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| CoreError::Network(format!("Failed to read response body: {e}")))?;

        debug!("Response Body: {response_text}");

        serde_json::from_str(&response_text).map_err(|e| {
            log::error!("Response did not match predictor contract: {e}");
            CoreError::Parse(format!("Unexpected response from predictor: {e}"))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn client_for(base_url: &str) -> PredictorClient {
        PredictorClient::new(&PredictorConfig {
            base_url: base_url.to_string(),
            reveal_delay: Duration::ZERO,
        })
        .unwrap()
    }

    #[test]
    fn test_client_construction_succeeds() {
        let result = PredictorClient::new(&PredictorConfig::default());
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_predict_unreachable_host_is_network_error() {
        // Nothing listens on the discard port
        let client = client_for("http://127.0.0.1:9");
        let result = client.predict("ten chars!").await;
        match result {
            Err(CoreError::Network(_)) => {}
            other => panic!("expected Network error, got {other:?}"),
        }
    }

    // NOTE: depends on a running predictor; failures may be environmental
    #[tokio::test]
    #[ignore = "requires a predictor instance on 127.0.0.1:8000"]
    async fn test_predict_round_trip_real() {
        let client = client_for("http://127.0.0.1:8000");
        let result = client
            .predict("The city council approved the new transit budget on Tuesday.")
            .await;
        let response = result.unwrap_or_else(|e| panic!("prediction failed: {e}"));
        // All three fields deserialized; labels constrained by the Label enum
        let _ = response.logistic_regression;
        let _ = response.random_forest;
        let _ = response.xgboost;
    }
}
