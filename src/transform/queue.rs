//! Hand-off Queue
//!
//! Connects the HTTP handlers (many concurrent producers) to the transform
//! worker (exactly one consumer). This is the only shared resource in the
//! process; its discipline is single-consumer FIFO delivery in arrival order.

use crate::ingest::types::FlatEvent;

use anyhow::Result;
use tokio::sync::mpsc;

/// Producer handle of the hand-off queue.
///
/// Wraps a bounded mpsc channel. With capacity 1 the hand-off behaves like a
/// rendezvous: `submit` does not complete until the worker side has freed the
/// slot, so a slow consumer directly throttles accepted throughput instead of
/// letting records pile up.
pub struct EventQueue {
    tx: mpsc::Sender<FlatEvent>,
}

impl EventQueue {
    /// Creates the queue, returning the producer handle and the receiver that
    /// must be given to the single transform worker.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<FlatEvent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    /// Hands one record to the worker.
    ///
    /// Waits indefinitely for capacity — there is no timeout and no
    /// cancellation. Fails only if the receiver is gone, which does not
    /// happen while the worker task is alive.
    pub async fn submit(&self, event: FlatEvent) -> Result<()> {
        self.tx
            .send(event)
            .await
            .map_err(|_| anyhow::anyhow!("transform worker is no longer receiving"))
    }
}
