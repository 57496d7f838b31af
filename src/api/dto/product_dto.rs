//! Product request body shared by create and update endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::ProductDraft;
use crate::error::CatalogError;

/// Request body for `POST /api/products` and `PUT /api/products/{id}`.
///
/// Carries the five mutable product fields; the id is never accepted from
/// the client. Updates replace the full field set.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductBody {
    /// Product name, must not be empty.
    pub name: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price, must not be negative. Accepts a JSON number or a
    /// decimal string; strings preserve exact precision.
    pub price: Decimal,
    /// Units in stock, must not be negative.
    pub stock_quantity: i32,
    /// Category used for exact-match filtering.
    pub category: String,
}

impl ProductBody {
    /// Validates the body into a [`ProductDraft`] at the request boundary,
    /// before the mutation service is invoked.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if a field value violates the
    /// catalog invariants.
    pub fn into_draft(self) -> Result<ProductDraft, CatalogError> {
        ProductDraft::new(
            self.name,
            self.description,
            self.price,
            self.stock_quantity,
            self.category,
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_price_from_string_and_number() {
        let from_string: Result<ProductBody, _> = serde_json::from_str(
            r#"{"name":"Laptop","price":"999.99","stock_quantity":50,"category":"Electronics"}"#,
        );
        let Ok(body) = from_string else {
            panic!("string price should deserialize");
        };
        assert_eq!(body.price, Decimal::new(99_999, 2));
        assert_eq!(body.description, None);

        let from_number: Result<ProductBody, _> = serde_json::from_str(
            r#"{"name":"Laptop","price":999.99,"stock_quantity":50,"category":"Electronics"}"#,
        );
        assert!(from_number.is_ok());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let result: Result<ProductBody, _> =
            serde_json::from_str(r#"{"price":"1.00","stock_quantity":1,"category":"X"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_values_fail_draft_validation() {
        let body: Result<ProductBody, _> = serde_json::from_str(
            r#"{"name":"Laptop","price":"-1","stock_quantity":50,"category":"Electronics"}"#,
        );
        let Ok(body) = body else {
            panic!("body should deserialize");
        };
        assert!(matches!(
            body.into_draft(),
            Err(CatalogError::Validation(_))
        ));
    }
}
