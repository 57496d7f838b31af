//! Change events describing product mutations.
//!
//! Every successful mutation publishes a [`ProductEvent`] through the
//! [`crate::emitter::EventEmitter`]. Events are transient: built per
//! mutation, handed to the broker client, never persisted by this service.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{Product, ProductId};

/// Kind of mutation a [`ProductEvent`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeKind {
    /// A new product was persisted.
    Created,
    /// An existing product's fields were replaced.
    Updated,
    /// A product was removed from the store.
    Deleted,
}

impl ChangeKind {
    /// Returns the event type as a static string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Updated => "UPDATED",
            Self::Deleted => "DELETED",
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time notification describing a product mutation.
///
/// Carries a snapshot of the mutated fields: the post-save state for
/// creates and updates, the pre-delete state for deletes. The timestamp is
/// taken when the event is built for publish, not when the store write
/// committed, so a delayed publish is observable as timestamp skew.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductEvent {
    /// What happened to the product.
    pub event_type: ChangeKind,
    /// Identity of the mutated product.
    pub product_id: ProductId,
    /// Name at the time of the mutation.
    pub name: String,
    /// Price at the time of the mutation.
    pub price: Decimal,
    /// Stock quantity at the time of the mutation.
    pub stock_quantity: i32,
    /// Category at the time of the mutation.
    pub category: String,
    /// Emission time, set at publish.
    pub timestamp: DateTime<Utc>,
}

impl ProductEvent {
    /// Builds an event snapshotting the given product.
    #[must_use]
    pub fn new(event_type: ChangeKind, product_id: ProductId, product: &Product) -> Self {
        Self {
            event_type,
            product_id,
            name: product.name.clone(),
            price: product.price,
            stock_quantity: product.stock_quantity,
            category: product.category.clone(),
            timestamp: Utc::now(),
        }
    }

    /// Returns the broker message key: the stringified product id, so all
    /// events for one product are observed in send order by any single
    /// consumer of that key.
    #[must_use]
    pub fn key(&self) -> String {
        self.product_id.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn make_product() -> Product {
        Product {
            id: Some(ProductId::new(1)),
            name: "Laptop".to_string(),
            description: Some("High-performance laptop".to_string()),
            price: Decimal::new(99_999, 2),
            stock_quantity: 50,
            category: "Electronics".to_string(),
        }
    }

    #[test]
    fn event_snapshots_product_fields() {
        let product = make_product();
        let event = ProductEvent::new(ChangeKind::Created, ProductId::new(1), &product);
        assert_eq!(event.event_type, ChangeKind::Created);
        assert_eq!(event.product_id, ProductId::new(1));
        assert_eq!(event.name, "Laptop");
        assert_eq!(event.price, Decimal::new(99_999, 2));
        assert_eq!(event.stock_quantity, 50);
        assert_eq!(event.category, "Electronics");
    }

    #[test]
    fn event_type_serializes_uppercase() {
        let event = ProductEvent::new(ChangeKind::Deleted, ProductId::new(9), &make_product());
        let json = serde_json::to_string(&event).unwrap_or_default();
        assert!(json.contains("\"DELETED\""));
        assert!(json.contains("\"product_id\":9"));
    }

    #[test]
    fn key_is_stringified_product_id() {
        let event = ProductEvent::new(ChangeKind::Updated, ProductId::new(123), &make_product());
        assert_eq!(event.key(), "123");
    }

    #[test]
    fn change_kind_as_str() {
        assert_eq!(ChangeKind::Created.as_str(), "CREATED");
        assert_eq!(ChangeKind::Updated.as_str(), "UPDATED");
        assert_eq!(ChangeKind::Deleted.as_str(), "DELETED");
    }
}
