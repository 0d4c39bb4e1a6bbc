//! Single-writer dispatch channel feeding the store.
use tokio::sync::mpsc;

use crate::store::StoreEvent;

/// Cloneable handle through which services and spawned tasks submit store
/// events. Events are applied by the event loop in the order they were sent,
/// which is what makes each update atomic without locking.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<StoreEvent>,
}

impl Dispatcher {
    /// Create the dispatcher and the receiving end owned by the event loop.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<StoreEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn dispatch(&self, event: StoreEvent) {
        // Only fails during shutdown, once the loop has dropped its receiver.
        if self.tx.send(event).is_err() {
            tracing::debug!("store channel closed; event dropped");
        }
    }
}
