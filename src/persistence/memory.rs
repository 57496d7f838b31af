//! In-memory implementation of the persistence layer, used by tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ProductStore;
use crate::domain::{Product, ProductId};
use crate::error::CatalogError;

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<ProductId, Product>,
}

/// Product store backed by a `BTreeMap` behind a `tokio::sync::RwLock`.
///
/// Implements the same contract as the PostgreSQL store: monotonic
/// store-assigned ids, stable id ordering, `ProductNotFound` on absent
/// update and delete targets.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Inner>,
}

impl InMemoryProductStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored products.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    /// Returns `true` if the store contains no products.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.rows.is_empty()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, CatalogError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Product, CatalogError> {
        let inner = self.inner.read().await;
        inner
            .rows
            .get(&id)
            .cloned()
            .ok_or(CatalogError::ProductNotFound(id))
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .values()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn save(&self, mut product: Product) -> Result<Product, CatalogError> {
        let mut inner = self.inner.write().await;
        match product.id {
            Some(id) => {
                if !inner.rows.contains_key(&id) {
                    return Err(CatalogError::ProductNotFound(id));
                }
                inner.rows.insert(id, product.clone());
                Ok(product)
            }
            None => {
                inner.next_id += 1;
                let id = ProductId::new(inner.next_id);
                product.id = Some(id);
                inner.rows.insert(id, product.clone());
                Ok(product)
            }
        }
    }

    async fn delete(&self, product: &Product) -> Result<(), CatalogError> {
        let Some(id) = product.id else {
            return Err(CatalogError::Validation(
                "cannot delete a product that was never persisted".to_string(),
            ));
        };
        let mut inner = self.inner.write().await;
        inner
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(CatalogError::ProductNotFound(id))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn make_product(name: &str, category: &str) -> Product {
        Product {
            id: None,
            name: name.to_string(),
            description: None,
            price: Decimal::new(1999, 2),
            stock_quantity: 10,
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_monotonic_ids() {
        let store = InMemoryProductStore::new();
        let a = store.save(make_product("A", "X")).await;
        let b = store.save(make_product("B", "X")).await;
        let (Ok(a), Ok(b)) = (a, b) else {
            panic!("saves should succeed");
        };
        assert_eq!(a.id, Some(ProductId::new(1)));
        assert_eq!(b.id, Some(ProductId::new(2)));
    }

    #[tokio::test]
    async fn find_by_id_returns_saved_product() {
        let store = InMemoryProductStore::new();
        let Ok(saved) = store.save(make_product("A", "X")).await else {
            panic!("save should succeed");
        };
        let Some(id) = saved.id else {
            panic!("saved product has an id");
        };
        let found = store.find_by_id(id).await;
        assert_eq!(found.ok(), Some(saved));
    }

    #[tokio::test]
    async fn find_by_missing_id_fails() {
        let store = InMemoryProductStore::new();
        let result = store.find_by_id(ProductId::new(99)).await;
        assert!(matches!(result, Err(CatalogError::ProductNotFound(_))));
    }

    #[tokio::test]
    async fn update_of_missing_id_fails() {
        let store = InMemoryProductStore::new();
        let mut product = make_product("A", "X");
        product.id = Some(ProductId::new(99));
        let result = store.save(product).await;
        assert!(matches!(result, Err(CatalogError::ProductNotFound(_))));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn update_replaces_row() {
        let store = InMemoryProductStore::new();
        let Ok(mut saved) = store.save(make_product("A", "X")).await else {
            panic!("save should succeed");
        };
        saved.name = "B".to_string();
        let updated = store.save(saved.clone()).await;
        assert_eq!(updated.ok(), Some(saved.clone()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let store = InMemoryProductStore::new();
        let Ok(saved) = store.save(make_product("A", "X")).await else {
            panic!("save should succeed");
        };
        assert!(store.delete(&saved).await.is_ok());
        assert!(store.is_empty().await);
        assert!(store.delete(&saved).await.is_err());
    }

    #[tokio::test]
    async fn find_all_is_in_id_order() {
        let store = InMemoryProductStore::new();
        let _ = store.save(make_product("A", "X")).await;
        let _ = store.save(make_product("B", "Y")).await;
        let Ok(all) = store.find_all().await else {
            panic!("find_all should succeed");
        };
        let names: Vec<_> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn category_filter_is_exact() {
        let store = InMemoryProductStore::new();
        let _ = store.save(make_product("A", "Electronics")).await;
        let _ = store.save(make_product("B", "electronics")).await;
        let Ok(matched) = store.find_by_category("Electronics").await else {
            panic!("find_by_category should succeed");
        };
        assert_eq!(matched.len(), 1);
        assert_eq!(matched.first().map(|p| p.name.as_str()), Some("A"));
    }
}
