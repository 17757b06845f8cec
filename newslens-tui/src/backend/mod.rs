//! Backend layer: analysis dispatch
//!
//! Wraps the `newslens-core` predictor client for the UI layer. Requests run
//! on the tokio runtime so the main loop keeps repainting; each task reports
//! back with an [`AppMessage::AnalysisCompleted`] over the completion
//! channel.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use newslens_core::{PredictorClient, PredictorConfig};

use crate::message::AppMessage;

/// Analysis dispatch service held by the application state
pub struct AnalysisService {
    handle: Handle,
    client: PredictorClient,
    reveal_delay: Duration,
    completion_tx: UnboundedSender<AppMessage>,
}

impl AnalysisService {
    /// Create the service around a runtime handle and predictor config
    pub fn new(
        handle: Handle,
        config: &PredictorConfig,
        completion_tx: UnboundedSender<AppMessage>,
    ) -> Result<Self> {
        let client = PredictorClient::new(config).context("failed to create predictor client")?;
        Ok(Self {
            handle,
            client,
            reveal_delay: config.reveal_delay,
            completion_tx,
        })
    }

    /// Dispatch one analysis request.
    ///
    /// On success the configured reveal delay elapses before the completion
    /// is sent, so the loading animation gets to play. The returned handle
    /// lets the update layer abort the task on clear.
    pub fn spawn_analysis(&self, generation: u64, text: String) -> JoinHandle<()> {
        let client = self.client.clone();
        let reveal_delay = self.reveal_delay;
        let tx = self.completion_tx.clone();

        self.handle.spawn(async move {
            let result = client.predict(&text).await;

            if result.is_ok() && !reveal_delay.is_zero() {
                tokio::time::sleep(reveal_delay).await;
            }

            // Receiver gone means the app is shutting down
            let _ = tx.send(AppMessage::AnalysisCompleted { generation, result });
        })
    }
}
