//! Event emitter: publishes product change events to an external broker.
//!
//! [`EventEmitter`] is the seam between the mutation service and the broker
//! client. Delivery is best-effort: the service logs and discards
//! [`EmitterError`]s, so a broker outage never fails a user-facing
//! mutation. There is no retry here; redelivery, if any, is the broker
//! client's concern.

pub mod kafka;
pub mod mock;

use async_trait::async_trait;

use crate::domain::ProductEvent;

pub use kafka::KafkaEventEmitter;
pub use mock::MockEmitter;

/// Failure at the emitter boundary. Never surfaced to API callers.
#[derive(Debug, thiserror::Error)]
pub enum EmitterError {
    /// The broker client could not be created or reached.
    #[error("failed to connect to broker: {0}")]
    Connection(String),

    /// The event could not be encoded for the wire.
    #[error("failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),

    /// The broker rejected or timed out the message.
    #[error("event delivery failed: {0}")]
    Delivery(String),
}

/// Publishes change events to a single logical topic, keyed by product id.
#[async_trait]
pub trait EventEmitter: Send + Sync + std::fmt::Debug {
    /// Submits one event to the broker and awaits the delivery outcome.
    ///
    /// # Errors
    ///
    /// Returns an [`EmitterError`] if the event cannot be encoded or
    /// delivered. Callers treat this as a logging signal only.
    async fn publish(&self, event: &ProductEvent) -> Result<(), EmitterError>;
}
