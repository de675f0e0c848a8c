//! Process-wide notification bus.

use tokio::sync::broadcast;

/// Published once the dynamic configuration has been fully applied.
pub const DYNAMIC_SCRIPTS_INITIALIZED: &str = "abp.dynamicScriptsInitialized";

/// Broadcast bus for named lifecycle events.
///
/// Late subscribers do not see events published before they subscribed.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<String>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }

    /// Publish an event; returns how many subscribers received it.
    pub fn trigger(&self, name: &str) -> usize {
        self.tx.send(name.to_string()).unwrap_or(0)
    }

    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
