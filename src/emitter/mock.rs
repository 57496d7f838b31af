//! Mock event emitter for testing.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{EmitterError, EventEmitter};
use crate::domain::ProductEvent;

/// Records published events in memory; can be switched into a failing mode
/// to simulate a broker outage.
#[derive(Debug, Default)]
pub struct MockEmitter {
    published: RwLock<Vec<ProductEvent>>,
    attempts: RwLock<usize>,
    fail_on_publish: RwLock<bool>,
}

impl MockEmitter {
    /// Creates a recording emitter that accepts every publish.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent publish fail (or succeed again).
    pub async fn set_fail_on_publish(&self, fail: bool) {
        *self.fail_on_publish.write().await = fail;
    }

    /// Returns how many events have been recorded.
    pub async fn published_count(&self) -> usize {
        self.published.read().await.len()
    }

    /// Returns how many publishes were attempted, including failed ones.
    pub async fn publish_attempts(&self) -> usize {
        *self.attempts.read().await
    }

    /// Drains and returns the recorded events.
    pub async fn take_published(&self) -> Vec<ProductEvent> {
        std::mem::take(&mut *self.published.write().await)
    }
}

#[async_trait]
impl EventEmitter for MockEmitter {
    async fn publish(&self, event: &ProductEvent) -> Result<(), EmitterError> {
        *self.attempts.write().await += 1;
        if *self.fail_on_publish.read().await {
            return Err(EmitterError::Delivery("mock publish failure".to_string()));
        }
        self.published.write().await.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{ChangeKind, Product, ProductId};
    use rust_decimal::Decimal;

    fn make_event(id: i64) -> ProductEvent {
        let product = Product {
            id: Some(ProductId::new(id)),
            name: "Mouse".to_string(),
            description: None,
            price: Decimal::new(7999, 2),
            stock_quantity: 80,
            category: "Electronics".to_string(),
        };
        ProductEvent::new(ChangeKind::Created, ProductId::new(id), &product)
    }

    #[tokio::test]
    async fn publish_records_event() {
        let emitter = MockEmitter::new();
        assert!(emitter.publish(&make_event(1)).await.is_ok());
        assert_eq!(emitter.published_count().await, 1);
    }

    #[tokio::test]
    async fn failing_mode_rejects_and_records_nothing() {
        let emitter = MockEmitter::new();
        emitter.set_fail_on_publish(true).await;
        let result = emitter.publish(&make_event(1)).await;
        assert!(matches!(result, Err(EmitterError::Delivery(_))));
        assert_eq!(emitter.published_count().await, 0);
        assert_eq!(emitter.publish_attempts().await, 1);
    }

    #[tokio::test]
    async fn take_published_drains_events() {
        let emitter = MockEmitter::new();
        let _ = emitter.publish(&make_event(1)).await;
        let _ = emitter.publish(&make_event(2)).await;
        let drained = emitter.take_published().await;
        assert_eq!(drained.len(), 2);
        assert_eq!(emitter.published_count().await, 0);
    }
}
