//! The managed target behind the bridge.

use std::sync::mpsc::Sender;

/// A host-owned service that accepts integer messages.
///
/// The service owns its own state; its only contract toward the bridge is
/// "accepts an integer message and performs a side effect". The side effect
/// here is recording the message, and optionally forwarding it to a probe
/// channel so callers can observe delivery.
pub struct Service {
    processed: Vec<i32>,
    probe: Option<Sender<i32>>,
}

impl Service {
    /// Create a new service.
    pub fn new() -> Self {
        Self {
            processed: Vec::new(),
            probe: None,
        }
    }

    /// Create a service that forwards every processed message to `probe`.
    pub fn with_probe(probe: Sender<i32>) -> Self {
        Self {
            processed: Vec::new(),
            probe: Some(probe),
        }
    }

    /// Process one message.
    pub fn process(&mut self, message: i32) {
        self.processed.push(message);
        if let Some(probe) = &self.probe {
            // Receiver may be gone; the service does not care.
            let _ = probe.send(message);
        }
    }

    /// Messages processed so far, in order.
    pub fn processed(&self) -> &[i32] {
        &self.processed
    }
}

impl Default for Service {
    fn default() -> Self {
        Self::new()
    }
}
