//! Type-safe product identifier.
//!
//! [`ProductId`] is a newtype wrapper around the store-assigned `i64` row
//! id, providing type safety so product identifiers cannot be confused with
//! other integers.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a catalog product.
///
/// Wraps the integer id assigned by the entity store on first persist.
/// Immutable thereafter; also used as the Kafka message key (stringified)
/// so all events for one product land on the same partition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Wraps a raw store-assigned id.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer id.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<ProductId> for i64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn display_is_raw_integer() {
        let id = ProductId::new(42);
        assert_eq!(format!("{id}"), "42");
    }

    #[test]
    fn serde_round_trip() {
        let id = ProductId::new(7);
        let json = serde_json::to_string(&id).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(json, "7");
        let deserialized: ProductId = serde_json::from_str(&json).ok().unwrap_or_else(|| {
            panic!("deserialization failed");
        });
        assert_eq!(id, deserialized);
    }

    #[test]
    fn round_trips_through_i64() {
        let id = ProductId::from(99_i64);
        assert_eq!(i64::from(id), 99);
        assert_eq!(id.get(), 99);
    }

    #[test]
    fn orders_by_raw_id() {
        assert!(ProductId::new(1) < ProductId::new(2));
    }

    #[test]
    fn hash_works_in_hashmap() {
        use std::collections::HashMap;
        let id = ProductId::new(5);
        let mut map = HashMap::new();
        map.insert(id, "test");
        assert_eq!(map.get(&id), Some(&"test"));
    }
}
