//! Product record and validated mutation draft.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ProductId;
use crate::error::CatalogError;

/// A catalog product as persisted by the entity store.
///
/// `id` is `None` only before the first persist; the store assigns it on
/// insert and it is immutable afterwards. All other fields are mutable via
/// update, which always replaces the full field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier, unset until the first persist.
    pub id: Option<ProductId>,
    /// Product name, never empty.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Unit price, non-negative, exact precision.
    pub price: Decimal,
    /// Units in stock, never negative.
    pub stock_quantity: i32,
    /// Category used for exact-match filtering.
    pub category: String,
}

/// Validated set of the five mutable product fields.
///
/// Construction is the validation boundary: a draft can only exist if the
/// field values satisfy the catalog invariants, so the service and store
/// never see invalid data.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    name: String,
    description: Option<String>,
    price: Decimal,
    stock_quantity: i32,
    category: String,
}

impl ProductDraft {
    /// Validates the given field values into a draft.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if `name` is empty, `price` is
    /// negative, or `stock_quantity` is negative.
    pub fn new(
        name: String,
        description: Option<String>,
        price: Decimal,
        stock_quantity: i32,
        category: String,
    ) -> Result<Self, CatalogError> {
        if name.is_empty() {
            return Err(CatalogError::Validation(
                "name must not be empty".to_string(),
            ));
        }
        if price < Decimal::ZERO {
            return Err(CatalogError::Validation(
                "price must not be negative".to_string(),
            ));
        }
        if stock_quantity < 0 {
            return Err(CatalogError::Validation(
                "stock_quantity must not be negative".to_string(),
            ));
        }
        Ok(Self {
            name,
            description,
            price,
            stock_quantity,
            category,
        })
    }

    /// Turns the draft into an unsaved product (`id` unset).
    #[must_use]
    pub fn into_product(self) -> Product {
        Product {
            id: None,
            name: self.name,
            description: self.description,
            price: self.price,
            stock_quantity: self.stock_quantity,
            category: self.category,
        }
    }

    /// Overwrites all five mutable fields of an existing product, keeping
    /// its identity. Partial updates are unsupported: callers supply the
    /// full desired state.
    #[must_use]
    pub fn apply(self, existing: Product) -> Product {
        Product {
            id: existing.id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock_quantity: self.stock_quantity,
            category: self.category,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn draft(name: &str, price: Decimal, stock: i32) -> Result<ProductDraft, CatalogError> {
        ProductDraft::new(
            name.to_string(),
            Some("test product".to_string()),
            price,
            stock,
            "Electronics".to_string(),
        )
    }

    #[test]
    fn valid_draft_becomes_unsaved_product() {
        let Ok(draft) = draft("Laptop", Decimal::new(99_999, 2), 50) else {
            panic!("draft should be valid");
        };
        let product = draft.into_product();
        assert_eq!(product.id, None);
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.price, Decimal::new(99_999, 2));
        assert_eq!(product.stock_quantity, 50);
    }

    #[test]
    fn empty_name_is_rejected() {
        let result = draft("", Decimal::ONE, 1);
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[test]
    fn negative_price_is_rejected() {
        let result = draft("Laptop", Decimal::new(-1, 0), 1);
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[test]
    fn negative_stock_is_rejected() {
        let result = draft("Laptop", Decimal::ONE, -1);
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[test]
    fn zero_price_and_stock_are_allowed() {
        assert!(draft("Freebie", Decimal::ZERO, 0).is_ok());
    }

    #[test]
    fn apply_replaces_all_fields_but_keeps_id() {
        let Ok(original) = draft("Laptop", Decimal::new(99_999, 2), 50) else {
            panic!("draft should be valid");
        };
        let mut existing = original.into_product();
        existing.id = Some(ProductId::new(3));

        let Ok(update) = ProductDraft::new(
            "Laptop Pro".to_string(),
            None,
            Decimal::new(129_999, 2),
            40,
            "Computers".to_string(),
        ) else {
            panic!("draft should be valid");
        };

        let updated = update.apply(existing);
        assert_eq!(updated.id, Some(ProductId::new(3)));
        assert_eq!(updated.name, "Laptop Pro");
        assert_eq!(updated.description, None);
        assert_eq!(updated.stock_quantity, 40);
        assert_eq!(updated.category, "Computers");
    }

    #[test]
    fn price_serializes_as_exact_string() {
        let Ok(draft) = draft("Laptop", Decimal::new(99_999, 2), 50) else {
            panic!("draft should be valid");
        };
        let json = serde_json::to_string(&draft.into_product()).unwrap_or_default();
        assert!(json.contains("\"999.99\""));
    }
}
