//! Transform Worker
//!
//! The single long-lived consumer of the hand-off queue. Runs for the whole
//! process lifetime; no shutdown signal is defined.
//!
//! ## Responsibilities
//! - **Consume**: pull flat records from the queue one at a time, in arrival order.
//! - **Transform**: remap each record into the structured shape.
//! - **Emit**: write each serialized record as exactly one log line.

use super::mapper::transform_event;
use crate::ingest::types::FlatEvent;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// The background consumer driving the transform loop.
pub struct TransformWorker {
    /// Receiving half of the hand-off queue. Owning it here enforces the
    /// single-consumer discipline at the type level.
    rx: mpsc::Receiver<FlatEvent>,
}

impl TransformWorker {
    /// Creates a worker over the receiving half of the hand-off queue.
    pub fn new(rx: mpsc::Receiver<FlatEvent>) -> Self {
        Self { rx }
    }

    /// Spawns the receive-process loop and returns immediately.
    ///
    /// The loop only ends when every producer handle has been dropped, which
    /// in normal operation is never.
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    async fn run(mut self) {
        tracing::info!("Transform worker started");

        while let Some(event) = self.rx.recv().await {
            match render_event(event) {
                Ok(json) => {
                    tracing::info!("Transformed request: {}", json);
                }
                Err(e) => {
                    // Record dropped, never retried; the client already got
                    // its 200. The loop keeps consuming.
                    tracing::error!("Failed to marshal transformed request: {}", e);
                }
            }
        }

        tracing::info!("Transform worker stopped, queue closed");
    }
}

/// Transforms and serializes one record into its log-line payload.
pub fn render_event(event: FlatEvent) -> Result<String, serde_json::Error> {
    serde_json::to_string(&transform_event(event))
}
