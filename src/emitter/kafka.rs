//! Kafka implementation of the event emitter.
//!
//! Publishes JSON-encoded [`ProductEvent`]s to a single configured topic.
//! Message key: stringified product id, so all events for one product land
//! on the same partition and are observed in send order.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use rdkafka::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};

use super::{EmitterError, EventEmitter};
use crate::config::CatalogConfig;
use crate::domain::ProductEvent;

/// Kafka-backed event emitter using an `rdkafka` [`FutureProducer`].
pub struct KafkaEventEmitter {
    producer: FutureProducer,
    topic: String,
    message_timeout: Duration,
}

impl KafkaEventEmitter {
    /// Creates a producer from the service configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EmitterError::Connection`] if the producer cannot be
    /// created from the configured bootstrap servers.
    pub fn new(config: &CatalogConfig) -> Result<Self, EmitterError> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &config.kafka_bootstrap_servers)
            .set(
                "message.timeout.ms",
                config.kafka_message_timeout_ms.to_string(),
            )
            .create()
            .map_err(|e| EmitterError::Connection(e.to_string()))?;

        tracing::info!(
            bootstrap_servers = %config.kafka_bootstrap_servers,
            topic = %config.kafka_topic,
            "connected kafka producer"
        );

        Ok(Self {
            producer,
            topic: config.kafka_topic.clone(),
            message_timeout: Duration::from_millis(config.kafka_message_timeout_ms),
        })
    }
}

impl fmt::Debug for KafkaEventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KafkaEventEmitter")
            .field("topic", &self.topic)
            .field("message_timeout", &self.message_timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl EventEmitter for KafkaEventEmitter {
    async fn publish(&self, event: &ProductEvent) -> Result<(), EmitterError> {
        let key = event.key();
        let payload = serde_json::to_vec(event)?;

        let record = FutureRecord::to(&self.topic).key(&key).payload(&payload);

        let (partition, offset) = self
            .producer
            .send(record, self.message_timeout)
            .await
            .map_err(|(e, _)| EmitterError::Delivery(e.to_string()))?;

        tracing::debug!(
            topic = %self.topic,
            key = %key,
            partition,
            offset,
            event_type = %event.event_type,
            "delivered product event"
        );

        Ok(())
    }
}
